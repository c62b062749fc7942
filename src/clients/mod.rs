//! HTTP plumbing for BigCommerce store API communication.
//!
//! This module provides the connection layer: request/response types, the
//! injected transport abstraction, and the rate-limit retry loop.
//!
//! # Overview
//!
//! - [`Connection`]: Owns the store config and executes requests with retry
//! - [`HttpTransport`]: The injected single-exchange transport trait
//! - [`ReqwestTransport`]: Default transport backed by `reqwest`
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RateLimit`]: Parsed `X-Rate-Limit-*` headers
//!
//! # Retry Behavior
//!
//! Only `429 Too Many Requests` is retried. The wait comes from the
//! `X-Rate-Limit-Time-Reset-Ms` header, floored to whole seconds; there is no
//! exponential backoff. After [`MAX_RATE_LIMIT_RETRIES`] retries the last
//! `429` response is returned to the caller as a normal response.
//! Transport failures propagate immediately.

mod connection;
mod errors;
mod http_request;
mod http_response;
mod transport;

pub use connection::{Connection, MAX_RATE_LIMIT_RETRIES};
pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{find_header, HttpResponse, RateLimit, RATE_LIMIT_RESET_HEADER};
pub use transport::{HttpTransport, PreparedRequest, ReqwestTransport};
