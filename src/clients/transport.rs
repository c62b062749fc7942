//! Injected HTTP transport abstraction.
//!
//! A [`Connection`](crate::clients::Connection) never talks to the network
//! directly. It hands a fully resolved [`PreparedRequest`] to an
//! [`HttpTransport`], which performs exactly one HTTP exchange and returns the
//! raw [`HttpResponse`]. Retries live in the connection, not here.
//!
//! [`ReqwestTransport`] is the default implementation. Tests and embedders can
//! supply their own transport through
//! [`Connection::with_transport`](crate::clients::Connection::with_transport).

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::HttpResponse;

/// A request with its URL and headers fully resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Absolute URL, without the query string.
    pub url: String,
    /// Merged default and per-request headers.
    pub headers: HashMap<String, String>,
    /// Query parameters (GET/DELETE).
    pub query: HashMap<String, String>,
    /// JSON body (POST/PUT).
    pub body: Option<serde_json::Value>,
}

/// Performs a single HTTP exchange.
///
/// Implementations must be `Send + Sync` so one transport can serve concurrent
/// calls. They must not retry; a connection-level failure is reported as an
/// [`HttpError`] and a server response of any status is returned as `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the raw response.
    async fn send(&self, request: &PreparedRequest) -> Result<HttpResponse, HttpError>;
}

/// Default transport backed by [`reqwest`] with rustls.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client, e.g. one with custom timeouts.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_lowercase(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect()
    }

    fn decode_body(code: u16, body_text: &str) -> serde_json::Value {
        if body_text.trim().is_empty() {
            return serde_json::Value::Null;
        }
        serde_json::from_str(body_text).unwrap_or_else(|_| {
            // Keep the raw text of server errors for debugging
            if code >= 500 {
                serde_json::json!({ "raw_body": body_text })
            } else {
                serde_json::Value::Null
            }
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        Ok(HttpResponse::new(
            code,
            headers,
            Self::decode_body(code, &body_text),
        ))
    }
}
