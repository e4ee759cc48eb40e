//! Adapter Layer
//!
//! Backend-agnostic contract for database administration. Every backend
//! adapter exposes the same five operations so callers can swap one
//! backend for another without changing call sites.
//!
//! # Components
//!
//! - [`Adapter`]: Core trait (ping, create, exists, list, delete)
//! - [`filter`] / [`Identifier`]: Allow-list sanitization shared by all adapters
//! - [`AdapterError`]: Error taxonomy surfaced by every operation
//!
//! # Example
//!
//! ```rust,no_run
//! use surreal_adapter::{Adapter, SurrealAdapter};
//!
//! # async fn run() -> Result<(), surreal_adapter::AdapterError> {
//! let adapter = SurrealAdapter::builder("http://localhost:8000")
//!     .credentials("root", "root")
//!     .build()?;
//!
//! if !adapter.exists("shop", None).await? {
//!     adapter.create("shop").await?;
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod identifier;
mod traits;

pub use error::AdapterError;
pub use identifier::{Identifier, MAX_IDENTIFIER_LENGTH, filter};
pub use traits::Adapter;
