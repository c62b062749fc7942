//! Page resource implementation.
//!
//! Pages are the store's web content: static pages, blog roots, contact
//! forms, raw HTML and links. Writes go through the bulk endpoints; a single
//! page is fetched from its own URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{BulkCreatable, BulkDeletable, Params, Retrievable};
//! use bigcommerce_api::rest::resources::Page;
//! use serde_json::json;
//!
//! let page = Page::retrieve(&conn, 12, Params::new()).await?;
//! println!("{:?}", page.first().and_then(|p| p.name()));
//!
//! Page::bulk_create(&conn, json!([
//!     {"name": "About", "type": "page", "body": "<p>Hi</p>"},
//!     {"name": "Contact", "type": "contact_form"},
//! ])).await?;
//!
//! Page::bulk_delete(&conn, &[12, 13]).await?;
//! ```

use std::ops::Deref;

use serde_json::Value;

use crate::rest::{
    BulkCreatable, BulkDeletable, BulkUpdatable, FromRecord, Listable, Record, Resource,
    Retrievable,
};

/// The `content/pages` collection.
#[derive(Debug, Clone, Copy)]
pub struct Page;

impl Resource for Page {
    type Record = PageRecord;

    const NAME: &'static str = "Page";
    const PATH: &'static str = "content/pages";
}

impl Listable for Page {}

impl Retrievable for Page {
    fn url_for_retrieve(id: u64) -> Option<String> {
        Some(Self::member_url(id))
    }
}

impl BulkCreatable for Page {}
impl BulkUpdatable for Page {}
impl BulkDeletable for Page {}

/// A page returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord(Record);

impl FromRecord for PageRecord {
    fn from_record(value: Value) -> Self {
        Self(Record::from_record(value))
    }
}

impl Deref for PageRecord {
    type Target = Record;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PageRecord {
    /// The page title.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    /// One of `page`, `raw`, `contact_form`, `feed`, `link` or `blog`.
    #[must_use]
    pub fn page_type(&self) -> Option<&str> {
        self.get_str("type")
    }

    /// HTML or raw content.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.get_str("body")
    }

    #[must_use]
    pub fn is_visible(&self) -> Option<bool> {
        self.get_bool("is_visible")
    }

    /// Id of the parent page, `0` for top-level pages.
    #[must_use]
    pub fn parent_id(&self) -> Option<u64> {
        self.get_u64("parent_id")
    }

    /// The storefront-relative URL.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.get_str("url")
    }
}
