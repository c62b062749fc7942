//! Resources of the v3 store API.
//!
//! # Available Resources
//!
//! | Resource | Path | Actions |
//! |----------|------|---------|
//! | [`Customer`] | `customers` | list, retrieve, bulk create/update/delete |
//! | [`Page`] | `content/pages` | list, retrieve, bulk create/update/delete |
//! | [`Wishlist`] | `wishlists` | list, retrieve, create, update, delete |
//! | [`CategoryTree`] | `catalog/trees` | list, retrieve, bulk upsert/delete |
//! | [`EmailStatusSettings`] | `settings/email-statuses` | fetch, save |
//!
//! # Parameter Objects
//!
//! - [`CustomerParams`] with nested [`Address`]es
//! - [`WishlistParams`] with nested [`WishlistItem`]s
//!
//! All of them implement [`Validate`](crate::validation::Validate) and are
//! turned into action parameters with
//! [`to_params`](crate::validation::to_params).

mod category_tree;
pub mod common;
mod customer;
mod email_status_settings;
mod page;
mod wishlist;

pub use category_tree::{CategoryTree, CategoryTreeRecord};
pub use common::Address;
pub use customer::{Customer, CustomerParams, CustomerRecord};
pub use email_status_settings::EmailStatusSettings;
pub use page::{Page, PageRecord};
pub use wishlist::{Wishlist, WishlistItem, WishlistParams, WishlistRecord};
