//! Adapter error types.
//!
//! All adapter operations return [`AdapterError`] on failure, which can be
//! matched to determine whether the backend, the network, the response body
//! or the caller's input was at fault.

use thiserror::Error;

/// Errors that can occur in adapter operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Backend answered with an HTTP status of 400 or above.
    #[error("backend returned HTTP {status}: {body}")]
    Transport {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configured request deadline elapsed.
    #[error("timeout elapsed")]
    Timeout,

    /// Response body is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response body is JSON but not in the expected shape.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// A statement inside a batch reported a non-OK status.
    #[error("statement {position} failed with status {status}: {detail}")]
    Statement {
        /// Zero-based position of the statement in its batch.
        position: usize,
        /// Status reported by the backend (e.g. `ERR`).
        status: String,
        /// Backend-supplied failure detail.
        detail: String,
    },

    /// Identifier rejected by the allow-list filter.
    #[error("invalid identifier: {0}")]
    Validation(String),

    /// Adapter could not be configured (client build, header values).
    #[error("config error: {0}")]
    Config(String),
}

impl AdapterError {
    /// Whether this error came from the request/response exchange rather than
    /// from caller input or adapter configuration.
    ///
    /// Decode failures count as transport failures: the backend answered,
    /// but not with something the adapter can read.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. }
                | Self::Network(_)
                | Self::Timeout
                | Self::Json(_)
                | Self::UnexpectedShape(_)
        )
    }

    /// HTTP status carried by a [`AdapterError::Transport`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = AdapterError::Transport {
            status: 500,
            body: "internal error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("internal error"));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_is_transport_classification() {
        assert!(AdapterError::Timeout.is_transport());
        assert!(AdapterError::UnexpectedShape("not an array".into()).is_transport());
        assert!(!AdapterError::Validation("bad-name".into()).is_transport());
        assert!(!AdapterError::Config("bad header".into()).is_transport());

        let stmt = AdapterError::Statement {
            position: 0,
            status: "ERR".into(),
            detail: "namespace already exists".into(),
        };
        assert!(!stmt.is_transport());
        assert_eq!(stmt.status(), None);
    }

    #[test]
    fn test_json_error_from() {
        let err: AdapterError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, AdapterError::Json(_)));
        assert!(err.is_transport());
    }
}
