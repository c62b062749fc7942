//! HTTP-specific error types for the BigCommerce API client.
//!
//! Only transport-level failures and malformed requests are errors at this
//! layer. Non-2xx responses (including a `429` that outlived the retry
//! budget) are returned as ordinary [`HttpResponse`](crate::clients::HttpResponse)
//! values.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::HttpError;
//!
//! match connection.execute(request).await {
//!     Ok(response) => println!("Status: {}", response.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Transport { message }) => println!("Transport error: {message}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The HTTP method is not one of the supported methods.
    #[error("Invalid Http method {method}.")]
    InvalidMethod {
        /// The invalid method that was provided.
        method: String,
    },

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for transport-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error from the default transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a custom [`HttpTransport`](crate::clients::HttpTransport).
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },
}
