//! Error types for resource actions.
//!
//! Resource actions have two error channels that never overlap:
//!
//! - **Call-time misuse** ([`ParameterError`]): wrong argument shape, a
//!   non-positive id, an empty payload. Raised before any network access.
//! - **Transport failures** ([`HttpError`]): the exchange itself failed.
//!
//! Business failures reported by the API (HTTP 400–599 with a structured
//! body) are *not* errors here. They are returned as data in
//! [`ApiResponse::error`](crate::rest::ApiResponse::error).
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{ResourceError, ParameterError, Retrievable};
//!
//! match Customer::retrieve(&conn, 0, Params::new()).await {
//!     Err(ResourceError::Parameter(ParameterError::InvalidId { id })) => {
//!         println!("bad id {id}");
//!     }
//!     Err(e) => println!("transport error: {e}"),
//!     Ok(response) if !response.is_success() => {
//!         println!("API error: {:?}", response.error());
//!     }
//!     Ok(response) => println!("{} records", response.len()),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// A resource action was called with malformed arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// An id was not a positive integer.
    #[error("Invalid id '{id}'. Expected a positive integer.")]
    InvalidId {
        /// The rejected id.
        id: u64,
    },

    /// A required mapping or sequence was empty.
    #[error("Parameter '{name}' must not be empty.")]
    EmptyParams {
        /// The name of the empty parameter.
        name: &'static str,
    },

    /// A parameter had the wrong JSON type.
    #[error("Parameter '{name}' should be {expected}, {found} provided.")]
    InvalidParamsType {
        /// The name of the parameter.
        name: &'static str,
        /// Description of the accepted shapes.
        expected: &'static str,
        /// The JSON type that was provided.
        found: &'static str,
    },

    /// A bulk delete was called without ids.
    #[error("At least one id is required.")]
    EmptyIds,

    /// A schema-governed object failed validation.
    #[error("Invalid {object}: {}", errors.join(" "))]
    Invalid {
        /// The type name of the object.
        object: &'static str,
        /// The validation messages.
        errors: Vec<String>,
    },

    /// A valid object could not be serialized into parameters.
    #[error("Could not serialize {object}: {message}")]
    Unserializable {
        /// The type name of the object.
        object: &'static str,
        /// The serializer's message.
        message: String,
    },
}

/// Error type for resource actions.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The action was called with malformed arguments.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// The HTTP exchange failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Returns the JSON type name used in parameter error messages.
#[must_use]
pub const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
