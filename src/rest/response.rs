//! Normalized responses for resource actions.
//!
//! This module provides [`ApiResponse<R>`], the uniform result of every
//! resource action. It is built from a raw [`HttpResponse`] by
//! [`ApiResponse::from_http_response`], which never fails: whatever the body
//! looks like, the caller gets records, pagination and an error descriptor
//! (each possibly empty) plus the HTTP status.
//!
//! # Body Shapes
//!
//! ```text
//! success list:   {"data": [{...}, ...], "meta": {"pagination": {...}}}
//! success single: {"data": {...}, "meta": {}}
//! failure:        {"status": 422, "title": "...", "type": "...", "errors": {...}}
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use bigcommerce_api::clients::HttpResponse;
//! use bigcommerce_api::rest::{ApiResponse, Record};
//! use serde_json::json;
//!
//! let raw = HttpResponse::new(
//!     200,
//!     HashMap::new(),
//!     json!({
//!         "data": [{"id": 1}, {"id": 2}],
//!         "meta": {"pagination": {"total": 2, "count": 2, "links": {"current": "?page=1"}}}
//!     }),
//! );
//!
//! let response: ApiResponse<Record> = ApiResponse::from_http_response(raw);
//! assert!(response.is_success());
//! assert_eq!(response.len(), 2);
//! assert_eq!(response.pagination().total.as_deref(), Some("2"));
//! assert!(!response.has_next_page());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpResponse, RateLimit};
use crate::rest::record::FromRecord;

/// Pagination metadata from `meta.pagination`.
///
/// Values are carried as strings exactly as the API sent them (numbers are
/// stringified). Every field is `None` when the body has no pagination block;
/// empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of records across all pages.
    pub total: Option<String>,
    /// Number of records on this page.
    pub count: Option<String>,
    /// Page size.
    pub per_page: Option<String>,
    /// The current page number.
    pub current_page: Option<String>,
    /// Total number of pages.
    pub total_pages: Option<String>,
    /// Query string of the current page.
    pub current_page_link: Option<String>,
    /// Query string of the previous page.
    pub previous_page_link: Option<String>,
    /// Query string of the next page.
    pub next_page_link: Option<String>,
}

impl Pagination {
    fn from_body(body: &Value) -> Self {
        let Some(block) = body.pointer("/meta/pagination").filter(|v| v.is_object()) else {
            return Self::default();
        };
        let link = |name: &str| block.get("links").and_then(|links| links.get(name));

        Self {
            total: block.get("total").and_then(stringify),
            count: block.get("count").and_then(stringify),
            per_page: block.get("per_page").and_then(stringify),
            current_page: block.get("current_page").and_then(stringify),
            total_pages: block.get("total_pages").and_then(stringify),
            current_page_link: link("current").and_then(stringify),
            previous_page_link: link("previous").and_then(stringify),
            next_page_link: link("next").and_then(stringify),
        }
    }

    /// Returns `true` if every field is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A failure reported by the API in the response body.
///
/// Present only for bodies carrying a top-level `status` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    /// The status the API reported in the body.
    pub status: Option<String>,
    /// Short summary of the failure.
    pub title: Option<String>,
    /// Link to the error type documentation.
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// Longer explanation, when given.
    pub detail: Option<String>,
    /// Field-level errors, passed through untouched.
    pub errors: Option<Value>,
}

impl ErrorDescriptor {
    fn from_body(body: &Value) -> Option<Self> {
        let map = body.as_object()?;
        if !map.contains_key("status") {
            return None;
        }

        Some(Self {
            status: map.get("status").and_then(stringify),
            title: map.get("title").and_then(stringify),
            type_: map.get("type").and_then(stringify),
            detail: map.get("detail").and_then(stringify),
            errors: map.get("errors").filter(|v| !v.is_null()).cloned(),
        })
    }
}

/// The normalized result of a resource action.
///
/// # Type Parameters
///
/// * `R` - The record type, built per element of the body's `data` key.
///
/// Business failures (HTTP 400–599) arrive here as data: check
/// [`is_success`](Self::is_success) and [`error`](Self::error) rather than
/// expecting an `Err`.
#[derive(Debug, Clone)]
pub struct ApiResponse<R> {
    data: Option<Vec<R>>,
    pagination: Pagination,
    error: Option<ErrorDescriptor>,
    status: u16,
    rate_limit: Option<RateLimit>,
}

impl<R: FromRecord> ApiResponse<R> {
    /// Normalizes a raw response.
    ///
    /// - `data` is one record per element when the body's `data` key is an
    ///   array, a single record when it is an object, and `None` otherwise
    ///   (including empty `204` bodies).
    /// - `error` is set iff the body is an object with a `status` key. It is
    ///   not reconciled with the HTTP status code.
    #[must_use]
    pub fn from_http_response(response: HttpResponse) -> Self {
        let HttpResponse {
            code,
            headers,
            mut body,
            rate_limit,
        } = response;

        let pagination = Pagination::from_body(&body);
        let error = ErrorDescriptor::from_body(&body);
        let data = match body.get_mut("data").map(Value::take) {
            Some(Value::Array(items)) => Some(items.into_iter().map(R::from_record).collect()),
            Some(object @ Value::Object(_)) => Some(vec![R::from_record(object)]),
            _ => None,
        };

        Self {
            data,
            pagination,
            error,
            status: code,
            rate_limit: rate_limit.or_else(|| RateLimit::from_headers(&headers)),
        }
    }
}

impl<R> ApiResponse<R> {
    /// Returns `true` if the HTTP status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the records, if the body carried any.
    #[must_use]
    pub fn data(&self) -> Option<&[R]> {
        self.data.as_deref()
    }

    /// Consumes the response and returns the records.
    #[must_use]
    pub fn into_data(self) -> Option<Vec<R>> {
        self.data
    }

    /// Returns the first record.
    #[must_use]
    pub fn first(&self) -> Option<&R> {
        self.data.as_ref().and_then(|records| records.first())
    }

    /// Number of records (0 when there is no data).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    /// Returns `true` if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the pagination metadata.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns `true` if the API linked a next page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.next_page_link.is_some()
    }

    /// Returns the error descriptor of a failed call.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorDescriptor> {
        self.error.as_ref()
    }

    /// Returns the rate limit headers of the final attempt.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.rate_limit.as_ref()
    }

    /// Converts every record, keeping the metadata.
    #[must_use]
    pub fn map_records<T, F>(self, f: F) -> ApiResponse<T>
    where
        F: FnMut(R) -> T,
    {
        ApiResponse {
            data: self.data.map(|records| records.into_iter().map(f).collect()),
            pagination: self.pagination,
            error: self.error,
            status: self.status,
            rate_limit: self.rate_limit,
        }
    }
}

/// Stringifies a scalar for pagination and error fields.
fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
