//! Category tree resource implementation.
//!
//! Trees attach a category hierarchy to one or more channels. The endpoint
//! upserts: creating and updating both `PUT` the array of trees to the
//! collection URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{BulkCreatable, Listable, Params};
//! use bigcommerce_api::rest::resources::CategoryTree;
//! use serde_json::json;
//!
//! CategoryTree::bulk_create(&conn, json!({"name": "Main", "channels": [1]})).await?;
//! let trees = CategoryTree::list(&conn, Params::new(), None, None).await?;
//! ```

use std::ops::Deref;

use serde_json::Value;

use crate::clients::HttpMethod;
use crate::rest::{
    BulkCreatable, BulkDeletable, BulkUpdatable, FromRecord, Listable, Record, Resource,
    Retrievable,
};

/// The `catalog/trees` collection.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTree;

impl Resource for CategoryTree {
    type Record = CategoryTreeRecord;

    const NAME: &'static str = "CategoryTree";
    const PATH: &'static str = "catalog/trees";
}

impl Listable for CategoryTree {}
impl Retrievable for CategoryTree {}

impl BulkCreatable for CategoryTree {
    const BULK_CREATE_METHOD: HttpMethod = HttpMethod::Put;
}

impl BulkUpdatable for CategoryTree {}
impl BulkDeletable for CategoryTree {}

/// A category tree returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTreeRecord(Record);

impl FromRecord for CategoryTreeRecord {
    fn from_record(value: Value) -> Self {
        Self(Record::from_record(value))
    }
}

impl Deref for CategoryTreeRecord {
    type Target = Record;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl CategoryTreeRecord {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    /// Ids of the channels the tree is assigned to.
    #[must_use]
    pub fn channels(&self) -> Vec<u64> {
        self.get_array("channels")
            .map(|ids| ids.iter().filter_map(Value::as_u64).collect())
            .unwrap_or_default()
    }
}
