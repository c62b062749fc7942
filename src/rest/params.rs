//! Parameter mappings and their query-string coercion.
//!
//! Action parameters are plain JSON objects ([`Params`]). GET and DELETE
//! requests need them as string-valued query parameters, so every value is
//! coerced to a string and `null` entries are dropped entirely.

use std::collections::HashMap;

use serde_json::Value;

use crate::rest::errors::ParameterError;

/// Parameters for a resource action: a JSON object.
///
/// Filter keys such as `name:like` or `id:in` are passed through verbatim.
pub type Params = serde_json::Map<String, Value>;

/// Coerces a JSON value into a query-string value.
///
/// - strings are used verbatim (an empty string is dropped)
/// - numbers and booleans use their JSON text
/// - arrays are comma-joined, skipping `null` elements
/// - objects are JSON-encoded
/// - `null` is dropped
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::query_value;
/// use serde_json::json;
///
/// assert_eq!(query_value(&json!(2)), Some("2".to_string()));
/// assert_eq!(query_value(&json!([4, 2])), Some("4,2".to_string()));
/// assert_eq!(query_value(&json!(null)), None);
/// ```
#[must_use]
pub fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let joined: Vec<String> = items.iter().filter_map(query_value).collect();
            if joined.is_empty() {
                None
            } else {
                Some(joined.join(","))
            }
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Converts action parameters to query parameters, dropping `null` entries.
#[must_use]
pub fn to_query(params: &Params) -> HashMap<String, String> {
    params
        .iter()
        .filter_map(|(key, value)| query_value(value).map(|v| (key.clone(), v)))
        .collect()
}

/// Joins ids for an `id:in` filter, e.g. `[4, 2]` becomes `"4,2"`.
#[must_use]
pub fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Rejects ids below 1.
///
/// # Errors
///
/// Returns [`ParameterError::InvalidId`] for `0`.
pub fn ensure_positive_id(id: u64) -> Result<u64, ParameterError> {
    if id < 1 {
        return Err(ParameterError::InvalidId { id });
    }
    Ok(id)
}
