//! Identifier allow-list filter.
//!
//! Names supplied by callers end up inside statement text, so they must be
//! validated before any concatenation. [`filter`] is the only way to obtain
//! an [`Identifier`], and statement builders only accept [`Identifier`].

use std::fmt;

use super::AdapterError;

/// Maximum identifier length in bytes.
pub const MAX_IDENTIFIER_LENGTH: usize = 255;

/// A name that passed the allow-list filter.
///
/// Contains only `[A-Za-z0-9_]` and is between 1 and
/// [`MAX_IDENTIFIER_LENGTH`] bytes long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate a raw name against the identifier allow-list.
///
/// # Errors
/// Returns `AdapterError::Validation` if the name is empty, too long, or
/// contains a character outside `[A-Za-z0-9_]`.
pub fn filter(value: &str) -> Result<Identifier, AdapterError> {
    if value.is_empty() {
        return Err(AdapterError::Validation(
            "identifier must not be empty".to_string(),
        ));
    }

    if value.len() > MAX_IDENTIFIER_LENGTH {
        return Err(AdapterError::Validation(format!(
            "identifier exceeds {} characters",
            MAX_IDENTIFIER_LENGTH
        )));
    }

    if let Some(invalid) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(AdapterError::Validation(format!(
            "'{}' contains disallowed character {:?}",
            value, invalid
        )));
    }

    Ok(Identifier(value.to_string()))
}
