//! BigCommerce API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for selecting which version
//! segment (`v2` or `v3`) appears in request paths.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// BigCommerce store API version.
///
/// The store API is split into a legacy `v2` surface and the current `v3`
/// surface. All resources shipped with this crate live under `v3`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiVersion;
///
/// let version: ApiVersion = "v3".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3);
/// assert_eq!(version.to_string(), "v3");
/// assert_eq!(ApiVersion::default(), ApiVersion::V3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// Legacy v2 API.
    V2,
    /// Current v3 API.
    #[default]
    V3,
}

impl ApiVersion {
    /// Returns the latest API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns the path segment for this version.
    #[must_use]
    pub const fn as_path_segment(&self) -> &'static str {
        match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v2" | "2" => Ok(Self::V2),
            "v3" | "3" => Ok(Self::V3),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
