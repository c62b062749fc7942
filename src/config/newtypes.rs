//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated BigCommerce store hash.
///
/// The store hash is the short identifier that appears in every API path
/// (`/stores/{store_hash}/v3/...`). It must be non-empty and contain only
/// ASCII alphanumerics.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StoreHash;
///
/// let hash = StoreHash::new("abc123").unwrap();
/// assert_eq!(hash.as_ref(), "abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreHash(String);

impl StoreHash {
    /// Creates a new validated store hash.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreHash`] if the hash is empty, or
    /// [`ConfigError::InvalidStoreHash`] if it contains non-alphanumeric characters.
    pub fn new(hash: impl Into<String>) -> Result<Self, ConfigError> {
        let hash = hash.into();
        let hash = hash.trim();
        if hash.is_empty() {
            return Err(ConfigError::EmptyStoreHash);
        }
        if !hash.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidStoreHash {
                hash: hash.to_string(),
            });
        }
        Ok(Self(hash.to_string()))
    }
}

impl AsRef<str> for StoreHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated API account access token.
///
/// The token is sent verbatim in the `X-Auth-Token` header. Its value is
/// masked in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated API host, used to point the client at a proxy or a mock server.
///
/// Only the scheme and host are validated; a trailing slash is stripped so the
/// host can be joined with the store path.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiHost;
///
/// let host = ApiHost::new("http://localhost:8080/").unwrap();
/// assert_eq!(host.as_ref(), "http://localhost:8080");
/// assert_eq!(host.scheme(), "http");
/// assert_eq!(host.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiHost {
    /// Default host of the BigCommerce store API.
    pub const DEFAULT: &'static str = "https://api.bigcommerce.com";

    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the URL has no scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiHost { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for ApiHost {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_hash_rejects_empty_string() {
        assert!(matches!(StoreHash::new(""), Err(ConfigError::EmptyStoreHash)));
        assert!(matches!(
            StoreHash::new("   "),
            Err(ConfigError::EmptyStoreHash)
        ));
    }

    #[test]
    fn test_store_hash_rejects_path_characters() {
        assert!(matches!(
            StoreHash::new("abc/123"),
            Err(ConfigError::InvalidStoreHash { .. })
        ));
        assert!(StoreHash::new("abc 123").is_err());
    }

    #[test]
    fn test_store_hash_trims_whitespace() {
        let hash = StoreHash::new("  abc123 ").unwrap();
        assert_eq!(hash.as_ref(), "abc123");
        assert_eq!(hash.to_string(), "abc123");
    }

    #[test]
    fn test_access_token_rejects_blank() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("  "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_api_host_validates_format() {
        let host = ApiHost::new("https://api.example.com").unwrap();
        assert_eq!(host.scheme(), "https");
        assert_eq!(host.host_name(), "api.example.com");

        let host = ApiHost::new("http://127.0.0.1:3000").unwrap();
        assert_eq!(host.host_name(), "127.0.0.1");
        assert_eq!(host.as_ref(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_api_host_rejects_invalid() {
        assert!(ApiHost::new("api.example.com").is_err());
        assert!(ApiHost::new("https://").is_err());
        assert!(ApiHost::new("://example.com").is_err());
    }

    #[test]
    fn test_api_host_default_points_at_bigcommerce() {
        let host = ApiHost::default();
        assert_eq!(host.as_ref(), "https://api.bigcommerce.com");
        assert_eq!(host.scheme(), "https");
        assert_eq!(host.host_name(), "api.bigcommerce.com");
    }
}
