//! SurrealDB database adapter.
//!
//! Translates generic database administration operations (ping, create,
//! exists, list, delete) into SurrealQL statement batches sent over
//! SurrealDB's HTTP interface, and interprets the ordered statement results.
//!
//! # Architecture
//!
//! - **Adapter**: Backend-agnostic trait, identifier filter, error taxonomy
//! - **Surreal**: Transport, statement builder, result interpreter, façade
//! - **Config**: YAML connection settings for the CLI and library callers
//!
//! # Example
//!
//! ```rust,no_run
//! use surreal_adapter::{Adapter, SurrealAdapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = SurrealAdapter::new("http://localhost:8000", "root", "root")?;
//!
//!     adapter.ping().await?;
//!     adapter.create("shop").await?;
//!     assert!(adapter.exists("shop", None).await?);
//!     println!("{:?}", adapter.list().await?);
//!
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod config;
pub mod surreal;

pub use adapter::{Adapter, AdapterError, Identifier, filter};
pub use config::{AdapterConfig, ConfigError};
pub use surreal::{SurrealAdapter, SurrealAdapterBuilder};
