//! Schema validation for parameter objects.
//!
//! Composite parameters (a customer with addresses, a wishlist with items)
//! are checked against a declarative [`Schema`] before they are submitted.
//! Validation is pure: it reads the object's fields through
//! [`Validate::field`] and returns human-readable messages, never modifying
//! the object.
//!
//! # Rules
//!
//! - **Type**: skipped for absent values. `Array` fields with an element type
//!   check every element, and nested objects are validated recursively with
//!   their messages prefixed by `field[index]`.
//! - **Required**: numbers and booleans are always present, strings must be
//!   non-blank, arrays and hashes non-empty, and nested objects valid.
//!
//! A type without a schema is never valid.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::resources::Address;
//! use bigcommerce_api::validation::Validate;
//!
//! let address = Address {
//!     last_name: Some("Doe".to_string()),
//!     address1: Some("1 Main St".to_string()),
//!     city: Some("Austin".to_string()),
//!     state_or_province: Some("Texas".to_string()),
//!     postal_code: Some("78701".to_string()),
//!     country_code: Some("US".to_string()),
//!     ..Address::default()
//! };
//!
//! assert!(!address.is_valid());
//! assert_eq!(address.validation_errors(), vec!["Attribute 'first_name' is required."]);
//! ```

mod schema;
mod validator;

pub use schema::{FieldRule, Schema, TypeTag};
pub use validator::{to_params, validate, FieldValue, Validate};
