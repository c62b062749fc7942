//! Records decoded from response bodies.
//!
//! The normalizer treats a record as a black box built by a [`FromRecord`]
//! constructor from one element of the body's `data` key. [`Record`] is the
//! generic implementation: the decoded JSON plus a `get(field)` accessor and
//! typed getters layered on top. Resources wrap it in newtypes with
//! field-specific accessors.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Constructs a record from one decoded JSON value.
///
/// Construction is total: it must not fail for any JSON input.
pub trait FromRecord: Sized {
    /// Builds the record.
    fn from_record(value: Value) -> Self;
}

/// A decoded JSON record with typed accessors.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::{FromRecord, Record};
/// use serde_json::json;
///
/// let record = Record::from_record(json!({"id": 7, "name": "Gifts", "is_public": true}));
/// assert_eq!(record.id(), Some(7));
/// assert_eq!(record.get_str("name"), Some("Gifts"));
/// assert_eq!(record.get_bool("is_public"), Some(true));
/// assert!(record.get("missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record(Value);

impl Record {
    /// Returns the raw value of `field`, if the record is an object that has it.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(field))
    }

    /// Returns `field` as a string slice.
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Returns `field` as an unsigned integer.
    #[must_use]
    pub fn get_u64(&self, field: &str) -> Option<u64> {
        self.get(field).and_then(Value::as_u64)
    }

    /// Returns `field` as a signed integer.
    #[must_use]
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    /// Returns `field` as a float.
    #[must_use]
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    /// Returns `field` as a boolean.
    #[must_use]
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    /// Returns `field` as an array.
    #[must_use]
    pub fn get_array(&self, field: &str) -> Option<&Vec<Value>> {
        self.get(field).and_then(Value::as_array)
    }

    /// Parses `field` as an RFC 3339 timestamp.
    #[must_use]
    pub fn get_datetime(&self, field: &str) -> Option<DateTime<Utc>> {
        self.get_str(field)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Returns the `id` field.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.get_u64("id")
    }

    /// Deserializes the record into a typed struct.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the shape doesn't match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.0.clone())
    }

    /// Returns the underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the record and returns the underlying JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl FromRecord for Record {
    fn from_record(value: Value) -> Self {
        Self(value)
    }
}

impl FromRecord for Value {
    fn from_record(value: Value) -> Self {
        value
    }
}
