//! Configuration types for the BigCommerce API client.
//!
//! This module provides the configuration used to initialize a
//! [`Connection`](crate::clients::Connection).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BigCommerceConfig`]: Credentials plus derived connection parameters
//! - [`BigCommerceConfigBuilder`]: A builder for constructing [`BigCommerceConfig`] instances
//! - [`StoreHash`]: A validated store identifier
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`ApiHost`]: A validated API host override
//! - [`ApiVersion`]: The API version path segment
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, BigCommerceConfig, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_path(), "https://api.bigcommerce.com/stores/abc123/v3");
//! ```

mod newtypes;
mod version;

use std::collections::HashMap;
use std::fmt;

pub use newtypes::{AccessToken, ApiHost, StoreHash};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the API account access token.
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Configuration for a BigCommerce store connection.
///
/// Holds the store credentials and derives the base path and default headers
/// used for every request. A config is immutable once built.
///
/// # Thread Safety
///
/// `BigCommerceConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone)]
pub struct BigCommerceConfig {
    store_hash: StoreHash,
    access_token: AccessToken,
    api_host: ApiHost,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    base_path: String,
    default_headers: HashMap<String, String>,
}

impl BigCommerceConfig {
    /// Creates a new builder for constructing a `BigCommerceConfig`.
    #[must_use]
    pub fn builder() -> BigCommerceConfigBuilder {
        BigCommerceConfigBuilder::new()
    }

    /// Shorthand for a config with default host and version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either value fails validation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::BigCommerceConfig;
    ///
    /// let config = BigCommerceConfig::new("abc123", "token").unwrap();
    /// assert_eq!(config.store_hash().as_ref(), "abc123");
    ///
    /// assert!(BigCommerceConfig::new("", "token").is_err());
    /// ```
    pub fn new(
        store_hash: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .store_hash(StoreHash::new(store_hash)?)
            .access_token(AccessToken::new(access_token)?)
            .build()
    }

    /// Returns the store hash.
    #[must_use]
    pub const fn store_hash(&self) -> &StoreHash {
        &self.store_hash
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the derived base path, e.g. `https://api.bigcommerce.com/stores/abc123/v3`.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

// Default headers are left out: they carry the token in clear.
impl fmt::Debug for BigCommerceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigCommerceConfig")
            .field("store_hash", &self.store_hash)
            .field("access_token", &self.access_token)
            .field("base_path", &self.base_path)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .finish_non_exhaustive()
    }
}

// Verify BigCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceConfig>();
};

/// Builder for constructing [`BigCommerceConfig`] instances.
///
/// Required fields are `store_hash` and `access_token`.
///
/// # Defaults
///
/// - `api_host`: `https://api.bigcommerce.com`
/// - `api_version`: `v3`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct BigCommerceConfigBuilder {
    store_hash: Option<StoreHash>,
    access_token: Option<AccessToken>,
    api_host: Option<ApiHost>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl BigCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store hash (required).
    #[must_use]
    pub fn store_hash(mut self, hash: StoreHash) -> Self {
        self.store_hash = Some(hash);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Overrides the API host, e.g. to target a proxy or a local mock server.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BigCommerceConfig`], deriving base path and default headers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_hash` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<BigCommerceConfig, ConfigError> {
        let store_hash = self.store_hash.ok_or(ConfigError::MissingRequiredField {
            field: "store_hash",
        })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;
        let api_host = self.api_host.unwrap_or_default();
        let api_version = self.api_version.unwrap_or_default();

        let base_path = format!(
            "{}/stores/{}/{}",
            api_host.as_ref(),
            store_hash,
            api_version
        );

        let user_agent = self.user_agent_prefix.as_deref().map_or_else(
            || format!("BigCommerce API Library v{SDK_VERSION} | Rust"),
            |prefix| format!("{prefix} | BigCommerce API Library v{SDK_VERSION} | Rust"),
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(AUTH_HEADER.to_string(), access_token.as_ref().to_string());

        Ok(BigCommerceConfig {
            store_hash,
            access_token,
            api_host,
            api_version,
            user_agent_prefix: self.user_agent_prefix,
            base_path,
            default_headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> BigCommerceConfig {
        BigCommerceConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .access_token(AccessToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_store_hash() {
        let result = BigCommerceConfigBuilder::new()
            .access_token(AccessToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "store_hash"
            })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = BigCommerceConfigBuilder::new()
            .store_hash(StoreHash::new("abc123").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_base_path_is_derived_from_store_hash() {
        let config = test_config();
        assert_eq!(
            config.base_path(),
            "https://api.bigcommerce.com/stores/abc123/v3"
        );
        assert_eq!(config.api_version(), ApiVersion::V3);
    }

    #[test]
    fn test_base_path_honours_host_and_version_overrides() {
        let config = BigCommerceConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .api_host(ApiHost::new("http://127.0.0.1:9999/").unwrap())
            .api_version(ApiVersion::V2)
            .build()
            .unwrap();

        assert_eq!(config.base_path(), "http://127.0.0.1:9999/stores/abc123/v2");
    }

    #[test]
    fn test_default_headers_carry_token_and_json_content_type() {
        let config = test_config();
        let headers = config.default_headers();

        assert_eq!(
            headers.get("X-Auth-Token"),
            Some(&"test-token".to_string())
        );
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = BigCommerceConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let user_agent = config.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("BigCommerce API Library"));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_debug_output_masks_token() {
        let config = test_config();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("BigCommerceConfig"));
        assert!(!debug_str.contains("test-token"));
    }

    #[test]
    fn test_new_shorthand_validates_inputs() {
        assert!(matches!(
            BigCommerceConfig::new("", "token"),
            Err(ConfigError::EmptyStoreHash)
        ));
        assert!(matches!(
            BigCommerceConfig::new("abc", ""),
            Err(ConfigError::EmptyAccessToken)
        ));
    }
}
