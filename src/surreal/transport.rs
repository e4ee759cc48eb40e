//! HTTP transport for the SurrealDB REST endpoint.
//!
//! One call sends exactly one request. There is no retry, and no deadline
//! unless one is configured.

use std::time::{Duration, Instant};

use base64::{Engine as _, engine::general_purpose};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use tokio::time::timeout;

use crate::adapter::AdapterError;
use crate::surreal::response::{BatchResponse, decode_results};
use crate::surreal::statement::Batch;

/// Namespace context header.
pub const HEADER_NS: HeaderName = HeaderName::from_static("ns");

/// Database context header.
pub const HEADER_DB: HeaderName = HeaderName::from_static("db");

/// HTTP method for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Get the method name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Backend route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Statement execution (`/sql`).
    Sql,
    /// Liveness probe (`/health`).
    Health,
}

impl Route {
    /// Get the route path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sql => "/sql",
            Self::Health => "/health",
        }
    }
}

/// Root-level credentials sent as HTTP Basic auth.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Authorization` header value: `Basic base64(username:password)` (RFC 7617).
    pub fn authorization(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        format!(
            "Basic {}",
            general_purpose::STANDARD.encode(credentials.as_bytes())
        )
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Builder for [`Transport`].
#[derive(Debug, Clone)]
pub struct TransportBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    namespace: Option<String>,
    database: Option<String>,
    timeout: Option<Duration>,
}

impl TransportBuilder {
    /// Create a builder for the given base URL (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: None,
            namespace: None,
            database: None,
            timeout: None,
        }
    }

    /// Set Basic auth credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Send an `NS` header with every request.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Send a `DB` header with every request.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Bound each request by a deadline. Unset means wait indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    /// Returns `AdapterError::Config` if the HTTP client cannot be built or a
    /// header value contains characters not allowed in HTTP headers.
    pub fn build(self) -> Result<Transport, AdapterError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref credentials) = self.credentials {
            headers.insert(AUTHORIZATION, header_value(&credentials.authorization())?);
        }
        if let Some(ref namespace) = self.namespace {
            headers.insert(HEADER_NS, header_value(namespace)?);
        }
        if let Some(ref database) = self.database {
            headers.insert(HEADER_DB, header_value(database)?);
        }

        let client = Client::builder()
            .http1_only()
            .build()
            .map_err(|e| AdapterError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Transport {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            headers,
            timeout: self.timeout,
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, AdapterError> {
    HeaderValue::from_str(value)
        .map_err(|e| AdapterError::Config(format!("invalid header value: {}", e)))
}

/// Single-request HTTP transport.
#[derive(Clone)]
pub struct Transport {
    client: Client,
    base_url: String,
    headers: HeaderMap,
    timeout: Option<Duration>,
}

impl Transport {
    /// Create a new transport builder.
    pub fn builder(base_url: impl Into<String>) -> TransportBuilder {
        TransportBuilder::new(base_url)
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured request deadline.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Submit a batch to the statement route and correlate the results.
    ///
    /// # Errors
    /// Any transport, decode, or statement failure; see [`AdapterError`].
    pub async fn execute<'b>(&self, batch: &'b Batch) -> Result<BatchResponse<'b>, AdapterError> {
        let body = self
            .send(HttpMethod::Post, Route::Sql, Some(batch.render()))
            .await?;
        let results = decode_results(&body)?;
        BatchResponse::new(batch, results)
    }

    /// Probe the liveness route. The response body is ignored.
    pub async fn health(&self) -> Result<(), AdapterError> {
        self.send(HttpMethod::Get, Route::Health, None).await?;
        Ok(())
    }

    /// Send one request and return the raw response body.
    ///
    /// # Errors
    /// - `AdapterError::Transport` for HTTP status 400 and above
    /// - `AdapterError::Network` if the exchange itself fails
    /// - `AdapterError::Timeout` if the configured deadline elapses
    pub async fn send(
        &self,
        method: HttpMethod,
        route: Route,
        body: Option<String>,
    ) -> Result<String, AdapterError> {
        let url = format!("{}{}", self.base_url, route.as_str());

        let mut request = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        }
        .headers(self.headers.clone());

        if let Some(body) = body {
            request = request.body(body);
        }

        let start = Instant::now();
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<(StatusCode, String), reqwest::Error>((status, text))
        };

        let (status, text) = match self.timeout {
            Some(deadline) => match timeout(deadline, exchange).await {
                Ok(result) => result?,
                Err(_) => {
                    tracing::warn!(
                        method = method.as_str(),
                        route = route.as_str(),
                        timeout_ms = deadline.as_millis(),
                        "Request timed out"
                    );
                    return Err(AdapterError::Timeout);
                }
            },
            None => exchange.await?,
        };

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        if status.as_u16() >= 400 {
            tracing::warn!(
                method = method.as_str(),
                route = route.as_str(),
                status = status.as_u16(),
                elapsed_ms,
                "Backend returned error status"
            );
            return Err(AdapterError::Transport {
                status: status.as_u16(),
                body: text,
            });
        }

        tracing::debug!(
            method = method.as_str(),
            route = route.as_str(),
            status = status.as_u16(),
            elapsed_ms,
            "Request completed"
        );

        Ok(text)
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_encoding() {
        // base64("root:root")
        assert_eq!(
            Credentials::new("root", "root").authorization(),
            "Basic cm9vdDpyb290"
        );
        // base64("alice:secret123")
        assert_eq!(
            Credentials::new("alice", "secret123").authorization(),
            "Basic YWxpY2U6c2VjcmV0MTIz"
        );
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let debug = format!("{:?}", Credentials::new("root", "hunter2"));
        assert!(debug.contains("root"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_routes_and_methods() {
        assert_eq!(Route::Sql.as_str(), "/sql");
        assert_eq!(Route::Health.as_str(), "/health");
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
    }

    #[test]
    fn test_builder_defaults() {
        let transport = Transport::builder("http://localhost:8000/").build().unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8000");
        assert_eq!(transport.request_timeout(), None);
        assert!(transport.headers.contains_key(ACCEPT));
        assert!(!transport.headers.contains_key(AUTHORIZATION));
        assert!(!transport.headers.contains_key(HEADER_NS));
    }

    #[test]
    fn test_builder_headers() {
        let transport = Transport::builder("http://localhost:8000")
            .credentials(Credentials::new("root", "root"))
            .namespace("shop")
            .database("orders")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(transport.headers[AUTHORIZATION], "Basic cm9vdDpyb290");
        assert_eq!(transport.headers[HEADER_NS], "shop");
        assert_eq!(transport.headers[HEADER_DB], "orders");
        assert_eq!(transport.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_builder_rejects_invalid_header_value() {
        let err = Transport::builder("http://localhost:8000")
            .namespace("bad\nvalue")
            .build()
            .unwrap_err();
        assert!(matches!(err, AdapterError::Config(_)));
    }

    #[test]
    fn test_debug_hides_headers() {
        let transport = Transport::builder("http://localhost:8000")
            .credentials(Credentials::new("root", "secret"))
            .build()
            .unwrap();
        let debug = format!("{:?}", transport);
        assert!(debug.contains("localhost:8000"));
        assert!(!debug.contains("Basic"));
    }
}
