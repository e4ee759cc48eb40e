//! Configuration module for the adapter binary and library callers.
//!
//! Provides YAML-based configuration loading and validation for:
//! - Backend endpoint (URL)
//! - Root credentials (with `${VAR:-default}` expansion)
//! - Optional request deadline and NS/DB context headers

mod app;
mod validation;

pub use app::{AdapterConfig, DEFAULT_USERNAME};
pub use validation::{ConfigError, expand_env_vars, parse_duration, validate_url};
