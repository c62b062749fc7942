//! Resource actions over the BigCommerce REST API.
//!
//! This module provides:
//!
//! - **[`Resource`] and the capability traits**: list, retrieve, create,
//!   update and delete actions, in single and bulk flavours
//! - **[`ApiResponse<R>`]**: the normalized result of every action, with
//!   records, [`Pagination`] and an [`ErrorDescriptor`]
//! - **[`Record`] and [`FromRecord`]**: how records are built from response
//!   bodies
//! - **[`Params`]**: action parameters, with query-string coercion
//! - **[`ParameterError`] and [`ResourceError`]**: call-time and transport errors
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{BigCommerceConfig, Connection};
//! use bigcommerce_api::rest::{BulkDeletable, Listable, Params};
//! use bigcommerce_api::rest::resources::Customer;
//!
//! let conn = Connection::new(BigCommerceConfig::new("abc123", "token")?)?;
//!
//! // List the second page of customers, two per page
//! let response = Customer::list(&conn, Params::new(), Some(2), Some(2)).await?;
//! if response.is_success() {
//!     for customer in response.data().unwrap_or_default() {
//!         println!("{:?}", customer.email());
//!     }
//!     if response.has_next_page() {
//!         // Fetch page 3...
//!     }
//! } else {
//!     println!("API error: {:?}", response.error());
//! }
//!
//! // Delete two customers in one request
//! Customer::bulk_delete(&conn, &[4, 2]).await?;
//! ```

mod errors;
mod params;
mod record;
mod resource;
mod response;

pub mod resources;

pub use errors::{json_type_name, ParameterError, ResourceError};
pub use params::{ensure_positive_id, join_ids, query_value, to_query, Params};
pub use record::{FromRecord, Record};
pub use resource::{
    BulkCreatable, BulkDeletable, BulkUpdatable, Creatable, Deletable, Listable, Resource,
    Retrievable, Updatable,
};
pub use response::{ApiResponse, ErrorDescriptor, Pagination};
