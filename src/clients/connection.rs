//! Connection to a BigCommerce store.
//!
//! This module provides the [`Connection`] type, which owns the store
//! configuration and an injected [`HttpTransport`], and executes requests
//! with rate-limit-aware retry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::{HttpTransport, PreparedRequest, ReqwestTransport};
use crate::config::BigCommerceConfig;

/// Maximum number of retries after a `429` response.
///
/// A call therefore makes at most `MAX_RATE_LIMIT_RETRIES + 1` attempts.
pub const MAX_RATE_LIMIT_RETRIES: u32 = 2;

/// An authenticated connection to one store.
///
/// The connection owns its [`BigCommerceConfig`] exclusively; the config is
/// never mutated after construction. Retry state is local to each
/// [`execute`](Self::execute) call, so one connection can serve concurrent
/// tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{BigCommerceConfig, Connection};
/// use bigcommerce_api::clients::{HttpMethod, HttpRequest};
///
/// let config = BigCommerceConfig::new("abc123", "access-token")?;
/// let connection = Connection::new(config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "customers")
///     .query_param("limit", "10")
///     .build()?;
/// let response = connection.execute(request).await?;
/// println!("Status: {}", response.code);
/// ```
#[derive(Clone)]
pub struct Connection {
    config: BigCommerceConfig,
    transport: Arc<dyn HttpTransport>,
}

// Verify Connection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connection>();
};

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Connection {
    /// Creates a connection using the default [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: BigCommerceConfig) -> Result<Self, HttpError> {
        Ok(Self::with_transport(config, Arc::new(ReqwestTransport::new()?)))
    }

    /// Creates a connection that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: BigCommerceConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &BigCommerceConfig {
        &self.config
    }

    /// Returns the base path requests are resolved against.
    #[must_use]
    pub fn base_path(&self) -> &str {
        self.config.base_path()
    }

    /// Executes one logical API call, retrying while rate limited.
    ///
    /// On a `429` response the `X-Rate-Limit-Time-Reset-Ms` header is read
    /// (case-insensitively) and the call sleeps for that many whole seconds
    /// before retrying. After [`MAX_RATE_LIMIT_RETRIES`] retries the last
    /// `429` response is returned as-is. Any other status ends the loop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation,
    /// or the transport's error if the exchange itself fails. Transport
    /// failures are never retried.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        let prepared = self.prepare(request);

        tracing::debug!(method = %prepared.method, url = %prepared.url, "Sending request");

        let mut retries: u32 = 0;
        loop {
            let response = self.transport.send(&prepared).await?;

            if !response.is_rate_limited() {
                return Ok(response);
            }

            if retries >= MAX_RATE_LIMIT_RETRIES {
                tracing::warn!(
                    "Rate limited on {} {} after {} retries, giving up",
                    prepared.method,
                    prepared.url,
                    retries
                );
                return Ok(response);
            }

            if let Some(secs) = response.rate_limit_reset_secs().filter(|secs| *secs > 0) {
                tracing::debug!("Rate limited, waiting {}s before retrying", secs);
                tokio::time::sleep(Duration::from_secs(secs)).await;
            }
            retries += 1;
        }
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.execute(Self::request(HttpMethod::Get, path, None, query))
            .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.execute(Self::request(HttpMethod::Post, path, Some(body), None))
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.execute(Self::request(HttpMethod::Put, path, Some(body), None))
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.execute(Self::request(HttpMethod::Delete, path, None, query))
            .await
    }

    fn request(
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> HttpRequest {
        HttpRequest {
            http_method: method,
            path: path.to_string(),
            body,
            query,
            extra_headers: None,
        }
    }

    /// Resolves the URL and merges headers.
    fn prepare(&self, request: HttpRequest) -> PreparedRequest {
        let path = request.path.trim_start_matches('/');
        let url = if path.is_empty() {
            self.config.base_path().to_string()
        } else {
            format!("{}/{}", self.config.base_path(), path)
        };

        let mut headers = self.config.default_headers().clone();
        if let Some(extra) = request.extra_headers {
            headers.extend(extra);
        }

        PreparedRequest {
            method: request.http_method,
            url,
            headers,
            query: request.query.unwrap_or_default(),
            body: request.body,
        }
    }
}
