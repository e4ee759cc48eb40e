//! Core adapter trait.

use super::AdapterError;

/// Backend-agnostic database administration contract.
///
/// Implementations translate each operation into the wire protocol of one
/// backend. All names passed in are raw caller input: implementations must
/// run them through [`filter`](super::filter) before building any statement
/// and must not touch the network when filtering fails.
///
/// # Return values
///
/// Every operation returns a definite answer on success. Negative outcomes
/// that are not failures (namespace already present on `create`, absent on
/// `exists`/`delete`) are reported as `Ok(false)`, never as an error.
#[async_trait::async_trait]
pub trait Adapter: Send + Sync + 'static {
    /// Check that the backend is reachable.
    ///
    /// Returns `Ok(true)` when the backend answers; unreachable backends
    /// surface as errors, so this never yields `Ok(false)`.
    async fn ping(&self) -> Result<bool, AdapterError>;

    /// Create a database.
    ///
    /// Returns `Ok(true)` if it was created, `Ok(false)` if it already existed.
    async fn create(&self, name: &str) -> Result<bool, AdapterError>;

    /// Check whether a database exists, optionally also checking for a
    /// collection inside it.
    async fn exists(&self, database: &str, collection: Option<&str>)
    -> Result<bool, AdapterError>;

    /// List all database names. Order is backend-defined.
    async fn list(&self) -> Result<Vec<String>, AdapterError>;

    /// Delete a database.
    ///
    /// Returns `Ok(true)` if it was removed, `Ok(false)` if it did not exist.
    async fn delete(&self, name: &str) -> Result<bool, AdapterError>;
}
