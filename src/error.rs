//! Error types for the BigCommerce API client.
//!
//! This module contains error types used for configuration and validation
//! of connection settings.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store hash cannot be empty.
    #[error("Store hash cannot be empty. Please provide the store identifier from your API account.")]
    EmptyStoreHash,

    /// Store hash contains characters that cannot appear in a URL path segment.
    #[error("Invalid store hash '{hash}'. Expected only ASCII letters and digits.")]
    InvalidStoreHash {
        /// The invalid hash that was provided.
        hash: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid API account access token.")]
    EmptyAccessToken,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'v2' or 'v3'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API host URL is invalid.
    #[error("Invalid API host '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.bigcommerce.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },
}
