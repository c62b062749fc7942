//! Wishlist resource implementation.
//!
//! Wishlists are managed one at a time through their own URLs.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{Creatable, Deletable, Params};
//! use bigcommerce_api::rest::resources::{Wishlist, WishlistItem, WishlistParams};
//! use bigcommerce_api::validation::to_params;
//!
//! let params = WishlistParams {
//!     customer_id: Some(4),
//!     name: Some("Birthday".to_string()),
//!     items: Some(vec![WishlistItem { product_id: Some(77), variant_id: None }]),
//!     ..Default::default()
//! };
//! let created = Wishlist::create(&conn, to_params(&params)?).await?;
//! Wishlist::delete(&conn, created.first().and_then(|w| w.id()).unwrap_or_default()).await?;
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::{
    Creatable, Deletable, FromRecord, Listable, Record, Resource, Retrievable, Updatable,
};
use crate::validation::{FieldRule, FieldValue, Schema, TypeTag, Validate};

/// The `wishlists` collection.
#[derive(Debug, Clone, Copy)]
pub struct Wishlist;

impl Resource for Wishlist {
    type Record = WishlistRecord;

    const NAME: &'static str = "Wishlist";
    const PATH: &'static str = "wishlists";
}

impl Listable for Wishlist {}

impl Retrievable for Wishlist {
    fn url_for_retrieve(id: u64) -> Option<String> {
        Some(Self::member_url(id))
    }
}

impl Creatable for Wishlist {}
impl Updatable for Wishlist {}
impl Deletable for Wishlist {}

/// A wishlist returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistRecord(Record);

impl FromRecord for WishlistRecord {
    fn from_record(value: Value) -> Self {
        Self(Record::from_record(value))
    }
}

impl Deref for WishlistRecord {
    type Target = Record;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl WishlistRecord {
    #[must_use]
    pub fn customer_id(&self) -> Option<u64> {
        self.get_u64("customer_id")
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    #[must_use]
    pub fn is_public(&self) -> Option<bool> {
        self.get_bool("is_public")
    }

    /// Share token of a public wishlist.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.get_str("token")
    }

    /// The wishlist's items, as records.
    #[must_use]
    pub fn items(&self) -> Vec<Record> {
        self.get_array("items")
            .map(|items| items.iter().cloned().map(Record::from_record).collect())
            .unwrap_or_default()
    }
}

static WISHLIST_SCHEMA: Schema = Schema::new(&[
    FieldRule::new("customer_id", TypeTag::Integer).required(),
    FieldRule::new("name", TypeTag::String).required(),
    FieldRule::new("is_public", TypeTag::Boolean),
    FieldRule::new("items", TypeTag::Array).elements(TypeTag::Object("WishlistItem")),
]);

static WISHLIST_ITEM_SCHEMA: Schema = Schema::new(&[
    FieldRule::new("product_id", TypeTag::Integer).required(),
    FieldRule::new("variant_id", TypeTag::Integer),
]);

/// Parameters for creating or updating a wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WishlistParams {
    /// Owner of the wishlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the wishlist can be shared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<WishlistItem>>,
}

impl Validate for WishlistParams {
    fn type_name(&self) -> &'static str {
        "WishlistParams"
    }

    fn schema(&self) -> Option<&'static Schema> {
        Some(&WISHLIST_SCHEMA)
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "customer_id" => self.customer_id.into(),
            "name" => self.name.as_deref().into(),
            "is_public" => self.is_public.into(),
            "items" => FieldValue::list_of(self.items.as_deref()),
            _ => FieldValue::Nil,
        }
    }
}

/// A product on a wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WishlistItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
}

impl Validate for WishlistItem {
    fn type_name(&self) -> &'static str {
        "WishlistItem"
    }

    fn schema(&self) -> Option<&'static Schema> {
        Some(&WISHLIST_ITEM_SCHEMA)
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "product_id" => self.product_id.into(),
            "variant_id" => self.variant_id.into(),
            _ => FieldValue::Nil,
        }
    }
}
