//! SurrealDB implementation of the [`Adapter`] contract.
//!
//! A database is modelled as a namespace holding a database of the same
//! name. Namespace presence in `INFO FOR KV` is the source of truth for
//! whether a database exists.

use std::time::Duration;

use crate::adapter::{Adapter, AdapterError, Identifier, filter};
use crate::config::AdapterConfig;
use crate::surreal::statement::{Batch, Slot};
use crate::surreal::transport::{Credentials, Transport, TransportBuilder};

/// SurrealDB adapter.
///
/// Holds only immutable connection settings; clones share the underlying
/// HTTP client and can be used from concurrent tasks.
#[derive(Debug, Clone)]
pub struct SurrealAdapter {
    transport: Transport,
}

impl SurrealAdapter {
    /// Create an adapter with root credentials and no request deadline.
    ///
    /// # Errors
    /// Returns `AdapterError::Config` if the HTTP client cannot be built.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AdapterError> {
        Self::builder(url).credentials(username, password).build()
    }

    /// Create a new adapter builder.
    pub fn builder(url: impl Into<String>) -> SurrealAdapterBuilder {
        SurrealAdapterBuilder {
            transport: Transport::builder(url),
        }
    }

    /// Create an adapter from loaded configuration.
    ///
    /// # Errors
    /// Returns `AdapterError::Config` if the HTTP client cannot be built or a
    /// header value is invalid.
    pub fn from_config(config: &AdapterConfig) -> Result<Self, AdapterError> {
        let mut builder =
            Self::builder(&config.url).credentials(&config.username, &config.password);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(ref namespace) = config.namespace {
            builder = builder.namespace(namespace);
        }
        if let Some(ref database) = config.database {
            builder = builder.database(database);
        }

        builder.build()
    }

    /// Underlying transport.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    async fn namespace_exists(&self, name: &Identifier) -> Result<bool, AdapterError> {
        let batch = Batch::info_for_kv();
        let response = self.transport.execute(&batch).await?;
        response.has_namespace(name.as_str())
    }
}

/// Builder for [`SurrealAdapter`].
#[derive(Debug, Clone)]
pub struct SurrealAdapterBuilder {
    transport: TransportBuilder,
}

impl SurrealAdapterBuilder {
    /// Set Basic auth credentials.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.transport = self
            .transport
            .credentials(Credentials::new(username, password));
        self
    }

    /// Bound each request by a deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.transport = self.transport.timeout(timeout);
        self
    }

    /// Send an `NS` context header with every request.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.transport = self.transport.namespace(namespace);
        self
    }

    /// Send a `DB` context header with every request.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.transport = self.transport.database(database);
        self
    }

    /// Build the adapter.
    ///
    /// # Errors
    /// Returns `AdapterError::Config` if the transport cannot be built.
    pub fn build(self) -> Result<SurrealAdapter, AdapterError> {
        Ok(SurrealAdapter {
            transport: self.transport.build()?,
        })
    }
}

#[async_trait::async_trait]
impl Adapter for SurrealAdapter {
    async fn ping(&self) -> Result<bool, AdapterError> {
        self.transport.health().await?;
        Ok(true)
    }

    async fn create(&self, name: &str) -> Result<bool, AdapterError> {
        let name = filter(name)?;

        if self.namespace_exists(&name).await? {
            tracing::debug!(namespace = %name, "Namespace already exists, skipping create");
            return Ok(false);
        }

        let batch = Batch::define_namespace_and_database(&name);
        self.transport.execute(&batch).await?;

        tracing::info!(namespace = %name, "Created namespace and database");
        Ok(true)
    }

    async fn exists(
        &self,
        database: &str,
        collection: Option<&str>,
    ) -> Result<bool, AdapterError> {
        let database = filter(database)?;
        let collection = collection.map(filter).transpose()?;

        if !self.namespace_exists(&database).await? {
            return Ok(false);
        }

        let Some(collection) = collection else {
            return Ok(true);
        };

        // A namespace defined elsewhere may lack the same-name database; the
        // table listing then fails, which means the table is not there.
        let batch = Batch::info_for_db(&database, &database);
        match self.transport.execute(&batch).await {
            Ok(response) => response.has_table(collection.as_str()),
            Err(AdapterError::Statement {
                position, detail, ..
            }) if batch.position(Slot::Tables) == Some(position) => {
                tracing::debug!(
                    namespace = %database,
                    table = %collection,
                    detail = %detail,
                    "Database listing failed, reporting table as absent"
                );
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    async fn list(&self) -> Result<Vec<String>, AdapterError> {
        let batch = Batch::info_for_kv();
        let response = self.transport.execute(&batch).await?;
        response.namespace_names()
    }

    async fn delete(&self, name: &str) -> Result<bool, AdapterError> {
        let name = filter(name)?;

        if !self.namespace_exists(&name).await? {
            tracing::debug!(namespace = %name, "Namespace does not exist, nothing to delete");
            return Ok(false);
        }

        let batch = Batch::remove_namespace(&name);
        self.transport.execute(&batch).await?;

        tracing::info!(namespace = %name, "Removed namespace");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_names_rejected_without_network() {
        // Nothing listens on port 9; any request would fail as a network error.
        let adapter = SurrealAdapter::new("http://127.0.0.1:9", "root", "root").unwrap();

        let err = adapter.create("shop; REMOVE NAMESPACE prod").await.unwrap_err();
        assert!(matches!(err, AdapterError::Validation(_)));

        let err = adapter.exists("shop-1", None).await.unwrap_err();
        assert!(matches!(err, AdapterError::Validation(_)));

        let err = adapter.exists("shop", Some("orders;")).await.unwrap_err();
        assert!(matches!(err, AdapterError::Validation(_)));

        let err = adapter.delete("").await.unwrap_err();
        assert!(matches!(err, AdapterError::Validation(_)));
    }

    #[test]
    fn test_from_config() {
        let config = AdapterConfig::new("http://localhost:8000/")
            .with_credentials("root", "root")
            .with_timeout(Duration::from_secs(3))
            .with_namespace("shop");

        let adapter = SurrealAdapter::from_config(&config).unwrap();
        assert_eq!(adapter.transport().base_url(), "http://localhost:8000");
        assert_eq!(
            adapter.transport().request_timeout(),
            Some(Duration::from_secs(3))
        );
    }
}
