//! Types embedded in other resources' parameters.
//!
//! These are not resources themselves (they don't implement
//! [`Resource`](crate::rest::Resource)); they are nested inside the
//! parameters of resources such as `Customer`.

mod address;

pub use address::Address;
