//! HTTP response types for the BigCommerce API client.
//!
//! This module provides the raw [`HttpResponse`] returned by a transport and
//! the [`RateLimit`] information parsed from its headers.

use std::collections::HashMap;

/// Header carrying the milliseconds until the rate-limit window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "X-Rate-Limit-Time-Reset-Ms";

const REQUESTS_LEFT_HEADER: &str = "X-Rate-Limit-Requests-Left";
const REQUESTS_QUOTA_HEADER: &str = "X-Rate-Limit-Requests-Quota";
const TIME_WINDOW_HEADER: &str = "X-Rate-Limit-Time-Window-Ms";

/// Rate limit information parsed from the `X-Rate-Limit-*` headers.
///
/// Every field is optional because the store API only sends the headers
/// it considers relevant for the current request.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::{HttpResponse, RateLimit};
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("X-Rate-Limit-Requests-Left".to_string(), "35".to_string());
/// headers.insert("X-Rate-Limit-Time-Reset-Ms".to_string(), "3000".to_string());
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.requests_left, Some(35));
/// assert_eq!(limit.reset_secs(), Some(3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests remaining in the current window.
    pub requests_left: Option<u32>,
    /// Total requests allowed per window.
    pub requests_quota: Option<u32>,
    /// Length of the window in milliseconds.
    pub time_window_ms: Option<u64>,
    /// Milliseconds until the window resets.
    pub time_reset_ms: Option<u64>,
}

impl RateLimit {
    /// Parses rate limit headers, returning `None` if none are present.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, String>) -> Option<Self> {
        let limit = Self {
            requests_left: parse_header(headers, REQUESTS_LEFT_HEADER),
            requests_quota: parse_header(headers, REQUESTS_QUOTA_HEADER),
            time_window_ms: parse_header(headers, TIME_WINDOW_HEADER),
            time_reset_ms: parse_header(headers, RATE_LIMIT_RESET_HEADER),
        };

        if limit == Self::default() {
            None
        } else {
            Some(limit)
        }
    }

    /// Whole seconds until the window resets (floor of the millisecond value).
    #[must_use]
    pub fn reset_secs(&self) -> Option<u64> {
        self.time_reset_ms.map(|ms| ms / 1000)
    }
}

/// Finds a header value by name, ignoring ASCII case.
#[must_use]
pub fn find_header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

fn parse_header<T: std::str::FromStr>(headers: &HashMap<String, String>, name: &str) -> Option<T> {
    find_header(headers, name).and_then(|value| value.trim().parse().ok())
}

/// A raw HTTP response from the store API.
///
/// Contains the status code, headers, and decoded JSON body. The body is
/// `Value::Null` when the response carried no content (e.g. `204`).
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Rate limit information parsed from the headers.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, String>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);
        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the request was rate limited (`429`).
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        self.code == 429
    }

    /// Returns a header value by name, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Whole seconds the server asks us to wait before the limit resets.
    ///
    /// Read from the headers rather than [`Self::rate_limit`] so responses
    /// built by hand in custom transports behave the same.
    #[must_use]
    pub fn rate_limit_reset_secs(&self) -> Option<u64> {
        parse_header::<u64>(&self.headers, RATE_LIMIT_RESET_HEADER).map(|ms| ms / 1000)
    }
}
