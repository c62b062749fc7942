//! Version-specific resource implementations.
//!
//! Resources are organized by API version:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports v3)
//!   v3/
//!     mod.rs         <- v3 resources
//!     common/        <- Embedded parameter types
//! ```
//!
//! Every resource currently lives under `v3` and is re-exported here:
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::resources::Customer;
//!
//! // Or explicitly:
//! use bigcommerce_api::rest::resources::v3::Customer;
//! ```

pub mod v3;

pub use v3::*;
