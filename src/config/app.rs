//! Adapter configuration structures.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::validation::{ConfigError, expand_env_vars, validate_url};

/// Default root username.
pub const DEFAULT_USERNAME: &str = "root";

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

/// Connection settings for a SurrealDB backend.
#[derive(Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Backend base URL, e.g. `http://localhost:8000`.
    pub url: String,

    /// Root username (default: "root").
    #[serde(default = "default_username")]
    pub username: String,

    /// Root password.
    #[serde(default)]
    pub password: String,

    /// Per-request deadline. Absent means requests may block indefinitely.
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,

    /// Namespace sent as the `NS` header.
    #[serde(default)]
    pub namespace: Option<String>,

    /// Database sent as the `DB` header. Requires `namespace`.
    #[serde(default)]
    pub database: Option<String>,
}

impl AdapterConfig {
    /// Create a configuration for the given URL with default credentials.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: default_username(),
            password: String::new(),
            timeout: None,
            namespace: None,
            database: None,
        }
    }

    /// Load configuration from a YAML file.
    ///
    /// `${VAR}` and `${VAR:-default}` references are expanded before parsing.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(&expand_env_vars(content))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns `ConfigError::ValidationError` if any field is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url(&self.url)?;

        if self.username.is_empty() {
            return Err(ConfigError::ValidationError(
                "username must not be empty".to_string(),
            ));
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::ValidationError(
                "timeout must be non-zero".to_string(),
            ));
        }

        if self.database.is_some() && self.namespace.is_none() {
            return Err(ConfigError::ValidationError(
                "database requires namespace to be set".to_string(),
            ));
        }

        Ok(())
    }

    /// Set credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set the request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `NS` context header.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the `DB` context header.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }
}

impl std::fmt::Debug for AdapterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("namespace", &self.namespace)
            .field("database", &self.database)
            .finish()
    }
}
