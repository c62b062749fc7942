//! Customer resource implementation.
//!
//! Customers are created, updated and deleted in batches. Retrieval by id
//! goes through the collection's `id:in` filter.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{BulkCreatable, Listable, Params, Retrievable};
//! use bigcommerce_api::rest::resources::{Customer, CustomerParams};
//! use bigcommerce_api::validation::to_params;
//!
//! let customers = Customer::list(&conn, Params::new(), Some(50), Some(1)).await?;
//! for customer in customers.data().unwrap_or_default() {
//!     println!("{:?}", customer.email());
//! }
//!
//! let params = CustomerParams {
//!     email: Some("jane@example.com".to_string()),
//!     first_name: Some("Jane".to_string()),
//!     last_name: Some("Doe".to_string()),
//!     ..Default::default()
//! };
//! let created = Customer::create(&conn, to_params(&params)?).await?;
//! ```

use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::{
    BulkCreatable, BulkDeletable, BulkUpdatable, FromRecord, Listable, Record, Resource,
    Retrievable,
};
use crate::validation::{FieldRule, FieldValue, Schema, TypeTag, Validate};

use super::common::Address;

/// The `customers` collection.
#[derive(Debug, Clone, Copy)]
pub struct Customer;

impl Resource for Customer {
    type Record = CustomerRecord;

    const NAME: &'static str = "Customer";
    const PATH: &'static str = "customers";
}

impl Listable for Customer {}
impl Retrievable for Customer {}
impl BulkCreatable for Customer {}
impl BulkUpdatable for Customer {}
impl BulkDeletable for Customer {}

/// A customer returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord(Record);

impl FromRecord for CustomerRecord {
    fn from_record(value: Value) -> Self {
        Self(Record::from_record(value))
    }
}

impl Deref for CustomerRecord {
    type Target = Record;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl CustomerRecord {
    /// The customer's email address.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.get_str("email")
    }

    /// The customer's first name.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.get_str("first_name")
    }

    /// The customer's last name.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.get_str("last_name")
    }

    /// The company the customer belongs to.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.get_str("company")
    }

    /// The customer group, if any.
    #[must_use]
    pub fn customer_group_id(&self) -> Option<u64> {
        self.get_u64("customer_group_id")
    }

    /// When the customer was created.
    #[must_use]
    pub fn date_created(&self) -> Option<DateTime<Utc>> {
        self.get_datetime("date_created")
    }
}

static CUSTOMER_SCHEMA: Schema = Schema::new(&[
    FieldRule::new("email", TypeTag::String).required(),
    FieldRule::new("first_name", TypeTag::String).required(),
    FieldRule::new("last_name", TypeTag::String).required(),
    FieldRule::new("company", TypeTag::String),
    FieldRule::new("phone", TypeTag::String),
    FieldRule::new("notes", TypeTag::String),
    FieldRule::new("customer_group_id", TypeTag::Integer),
    FieldRule::new("accepts_product_review_abandoned_cart_emails", TypeTag::Boolean),
    FieldRule::new("addresses", TypeTag::Array).elements(TypeTag::Object("Address")),
]);

/// Parameters for creating or updating a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_product_review_abandoned_cart_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
}

impl Validate for CustomerParams {
    fn type_name(&self) -> &'static str {
        "CustomerParams"
    }

    fn schema(&self) -> Option<&'static Schema> {
        Some(&CUSTOMER_SCHEMA)
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "email" => self.email.as_deref().into(),
            "first_name" => self.first_name.as_deref().into(),
            "last_name" => self.last_name.as_deref().into(),
            "company" => self.company.as_deref().into(),
            "phone" => self.phone.as_deref().into(),
            "notes" => self.notes.as_deref().into(),
            "customer_group_id" => self.customer_group_id.into(),
            "accepts_product_review_abandoned_cart_emails" => {
                self.accepts_product_review_abandoned_cart_emails.into()
            }
            "addresses" => FieldValue::list_of(self.addresses.as_deref()),
            _ => FieldValue::Nil,
        }
    }
}
