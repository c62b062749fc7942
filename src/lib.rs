//! # BigCommerce API Rust Client
//!
//! An async Rust client for the BigCommerce v3 store REST API, providing
//! type-safe configuration, a rate-limit-aware connection, and a uniform
//! action protocol over REST resources.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BigCommerceConfig`] and [`BigCommerceConfigBuilder`]
//! - Validated newtypes for store credentials
//! - A [`Connection`] that retries rate-limited (`429`) calls using the
//!   server's reset hint, over an injectable [`HttpTransport`]
//! - Capability traits for list/retrieve/create/update/delete and their bulk
//!   counterparts, via [`rest`]
//! - Normalized responses with records, pagination and error descriptors
//! - A declarative schema validator for parameter objects, via [`validation`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, ApiVersion, BigCommerceConfig, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .user_agent_prefix("my-app/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_path(), "https://api.bigcommerce.com/stores/abc123/v3");
//! ```
//!
//! ## Resource Actions
//!
//! ```rust,ignore
//! use bigcommerce_api::{BigCommerceConfig, Connection};
//! use bigcommerce_api::rest::{BulkCreatable, Listable, Params, Retrievable};
//! use bigcommerce_api::rest::resources::{Customer, CustomerParams};
//! use bigcommerce_api::validation::to_params;
//!
//! let conn = Connection::new(BigCommerceConfig::new("abc123", "token")?)?;
//!
//! // Business failures come back as data, not as errors
//! let response = Customer::retrieve(&conn, 42, Params::new()).await?;
//! match response.error() {
//!     Some(error) => println!("{:?}: {:?}", error.status, error.title),
//!     None => println!("{:?}", response.first().and_then(|c| c.email())),
//! }
//!
//! // Validate before submitting
//! let params = CustomerParams {
//!     email: Some("jane@example.com".to_string()),
//!     first_name: Some("Jane".to_string()),
//!     last_name: Some("Doe".to_string()),
//!     ..Default::default()
//! };
//! Customer::create(&conn, to_params(&params)?).await?;
//! ```
//!
//! ## Custom Transports
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bigcommerce_api::{BigCommerceConfig, Connection};
//! use bigcommerce_api::clients::ReqwestTransport;
//!
//! let client = reqwest::Client::builder()
//!     .timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//! let conn = Connection::with_transport(
//!     BigCommerceConfig::new("abc123", "token")?,
//!     Arc::new(ReqwestTransport::with_client(client)),
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the connection is passed explicitly to every action
//! - **Fail-fast validation**: newtypes validate on construction and actions
//!   reject malformed arguments before any request
//! - **Thread-safe**: `Connection` is `Send + Sync`; retry state is per call
//! - **Async-first**: designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod validation;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiHost, ApiVersion, BigCommerceConfig, BigCommerceConfigBuilder, StoreHash,
};
pub use error::ConfigError;

// Re-export connection types
pub use clients::{
    Connection, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpTransport, InvalidHttpRequestError, RateLimit, ReqwestTransport,
};

// Re-export resource action types
pub use rest::{ApiResponse, ParameterError, Params, Record, ResourceError};
