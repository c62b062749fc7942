//! Order email status settings.
//!
//! A singleton: the store has exactly one settings object, read and written
//! at the collection URL itself. Use [`EmailStatusSettings::fetch`] and
//! [`EmailStatusSettings::save`] rather than the id-based actions.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::resources::EmailStatusSettings;
//! use serde_json::json;
//!
//! let settings = EmailStatusSettings::fetch(&conn).await?;
//! println!("{:?}", settings.first().and_then(|s| s.get("shipped")));
//!
//! let params = json!({"shipped": true}).as_object().cloned().unwrap_or_default();
//! EmailStatusSettings::save(&conn, params).await?;
//! ```

use crate::clients::Connection;
use crate::rest::{
    ApiResponse, Params, Record, Resource, ResourceError, Retrievable, Updatable,
};

/// Placeholder id for the id-based actions; singleton URLs ignore it.
const SINGLETON_ID: u64 = 1;

/// The `settings/email-statuses` singleton.
#[derive(Debug, Clone, Copy)]
pub struct EmailStatusSettings;

impl Resource for EmailStatusSettings {
    type Record = Record;

    const NAME: &'static str = "EmailStatusSettings";
    const PATH: &'static str = "settings/email-statuses";
}

impl Retrievable for EmailStatusSettings {
    fn url_for_retrieve(_id: u64) -> Option<String> {
        Some(Self::PATH.to_string())
    }
}

impl Updatable for EmailStatusSettings {
    fn update_url(_id: u64) -> String {
        Self::PATH.to_string()
    }
}

impl EmailStatusSettings {
    /// Reads the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the exchange fails.
    pub async fn fetch(conn: &Connection) -> Result<ApiResponse<Record>, ResourceError> {
        Self::retrieve(conn, SINGLETON_ID, Params::new()).await
    }

    /// Writes the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the exchange fails.
    pub async fn save(
        conn: &Connection,
        params: Params,
    ) -> Result<ApiResponse<Record>, ResourceError> {
        Self::update(conn, SINGLETON_ID, params).await
    }
}
