//! Resource actions as capability traits.
//!
//! A type describes an API collection by implementing [`Resource`] (its
//! record type, display name and collection path). It then opts into each
//! action it supports by implementing the matching capability trait. Every
//! capability comes with default implementations, so most resources only
//! need an empty `impl` block:
//!
//! | Verb     | Single flavour  | Bulk flavour      |
//! |----------|-----------------|-------------------|
//! | list     | [`Listable`]    |                   |
//! | retrieve | [`Retrievable`] |                   |
//! | create   | [`Creatable`]   | [`BulkCreatable`] |
//! | update   | [`Updatable`]   | [`BulkUpdatable`] |
//! | delete   | [`Deletable`]   | [`BulkDeletable`] |
//!
//! A resource implements either the single or the bulk flavour of a verb,
//! never both. The bulk flavours still offer the single-record call, which
//! delegates to the bulk one with a one-element payload.
//!
//! All actions take the [`Connection`] explicitly and return an
//! [`ApiResponse`]. Malformed arguments are rejected with
//! [`ResourceError::Parameter`] before anything is sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{Listable, Params, Record, Resource, Retrievable};
//!
//! pub struct Brand;
//!
//! impl Resource for Brand {
//!     type Record = Record;
//!     const NAME: &'static str = "Brand";
//!     const PATH: &'static str = "catalog/brands";
//! }
//!
//! impl Listable for Brand {}
//! impl Retrievable for Brand {}
//!
//! let page = Brand::list(&conn, Params::new(), Some(50), Some(1)).await?;
//! let one = Brand::retrieve(&conn, 12, Params::new()).await?;
//! ```

use serde_json::Value;

use crate::clients::{Connection, HttpError, HttpMethod, HttpRequest};
use crate::rest::errors::{json_type_name, ParameterError, ResourceError};
use crate::rest::params::{ensure_positive_id, join_ids, to_query, Params};
use crate::rest::record::FromRecord;
use crate::rest::response::ApiResponse;

/// An API collection.
pub trait Resource {
    /// The record type built from each element of the response `data`.
    type Record: FromRecord;

    /// Display name used in logs (e.g. `"Customer"`).
    const NAME: &'static str;

    /// Collection path relative to the store base path (e.g. `"customers"`).
    const PATH: &'static str;

    /// Returns the URL of a single member: `{PATH}/{id}`.
    #[must_use]
    fn member_url(id: u64) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

/// Resources whose collection can be listed.
#[allow(async_fn_in_trait)]
pub trait Listable: Resource {
    /// Lists records matching `params`.
    ///
    /// `per_page` and `page` are sent as `limit` and `page` when given.
    /// Parameter values are coerced to strings and `null` entries are
    /// dropped; filter keys like `name:like` pass through verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the exchange fails.
    async fn list(
        conn: &Connection,
        params: Params,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<ApiResponse<Self::Record>, ResourceError> {
        let request = HttpRequest::builder(HttpMethod::Get, Self::PATH)
            .query_params(to_query(&params))
            .query_param_opt("limit", per_page.map(|n| n.to_string()))
            .query_param_opt("page", page.map(|n| n.to_string()))
            .build()
            .map_err(HttpError::from)?;

        dispatch(conn, Self::NAME, "list", request).await
    }
}

/// Resources whose members can be fetched by id.
#[allow(async_fn_in_trait)]
pub trait Retrievable: Resource {
    /// URL of a single member, for APIs that expose one.
    ///
    /// Returns `None` by default, in which case [`retrieve`](Self::retrieve)
    /// filters the collection with `id:in`.
    #[must_use]
    fn url_for_retrieve(_id: u64) -> Option<String> {
        None
    }

    /// Retrieves the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidId`] for `0`, without any request.
    /// Returns [`ResourceError::Http`] if the exchange fails.
    async fn retrieve(
        conn: &Connection,
        id: u64,
        params: Params,
    ) -> Result<ApiResponse<Self::Record>, ResourceError> {
        let id = ensure_positive_id(id)?;

        // The requested id always wins over an `id:in` passed in `params`.
        let mut query = to_query(&params);
        let url = match Self::url_for_retrieve(id) {
            Some(url) => url,
            None => {
                query.insert("id:in".to_string(), id.to_string());
                Self::PATH.to_string()
            }
        };
        let request = HttpRequest::builder(HttpMethod::Get, url)
            .query_params(query)
            .build()
            .map_err(HttpError::from)?;

        dispatch(conn, Self::NAME, "retrieve", request).await
    }
}

/// Resources created one at a time.
#[allow(async_fn_in_trait)]
pub trait Creatable: Resource {
    /// Creates a record from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::EmptyParams`] if `params` is empty.
    /// Returns [`ResourceError::Http`] if the exchange fails.
    async fn create(
        conn: &Connection,
        params: Params,
    ) -> Result<ApiResponse<Self::Record>, ResourceError> {
        if params.is_empty() {
            return Err(ParameterError::EmptyParams { name: "params" }.into());
        }

        let request = HttpRequest::builder(HttpMethod::Post, Self::PATH)
            .body(Value::Object(params))
            .build()
            .map_err(HttpError::from)?;

        dispatch(conn, Self::NAME, "create", request).await
    }
}

/// Resources created in batches.
#[allow(async_fn_in_trait)]
pub trait BulkCreatable: Resource {
    /// Method used for bulk writes. Upserting collections use `PUT`.
    const BULK_CREATE_METHOD: HttpMethod = HttpMethod::Post;

    /// Creates every record described by `params`.
    ///
    /// `params` is either one object or an array of objects; a single object
    /// is sent as a one-element array.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidParamsType`] for any other shape and
    /// [`ParameterError::EmptyParams`] for an empty array.
    /// Returns [`ResourceError::Http`] if the exchange fails.
    async fn bulk_create(
        conn: &Connection,
        params: Value,
    ) -> Result<ApiResponse<Self::Record>, ResourceError> {
        let records = match params {
            object @ Value::Object(_) => vec![object],
            Value::Array(items) => {
                if let Some(bad) = items.iter().find(|item| !item.is_object()) {
                    return Err(invalid_bulk_params(bad).into());
                }
                items
            }
            other => return Err(invalid_bulk_params(&other).into()),
        };
        if records.is_empty() {
            return Err(ParameterError::EmptyParams { name: "params" }.into());
        }

        let request = HttpRequest::builder(Self::BULK_CREATE_METHOD, Self::PATH)
            .body(Value::Array(records))
            .build()
            .map_err(HttpError::from)?;

        dispatch(conn, Self::NAME, "bulk_create", request).await
    }

    /// Creates one record through the bulk endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::EmptyParams`] if `params` is empty.
    /// Returns [`ResourceError::Http`] if the exchange fails.
    async fn create(
        conn: &Connection,
        params: Params,
    ) -> Result<ApiResponse<Self::Record>, ResourceError> {
        if params.is_empty() {
            return Err(ParameterError::EmptyParams { name: "params" }.into());
        }
        Self::bulk_create(conn, Value::Array(vec![Value::Object(params)])).await
    }
}

fn invalid_bulk_params(found: &Value) -> ParameterError {
    ParameterError::InvalidParamsType {
        name: "params",
        expected: "an object or an array of objects",
        found: json_type_name(found),
    }
}

/// Resources updated one at a time.
#[allow(async_fn_in_trait)]
pub trait Updatable: Resource {
    /// URL the update is sent to. Defaults to `{PATH}/{id}`.
    #[must_use]
    fn update_url(id: u64) -> String {
        Self::member_url(id)
    }

    /// Body of the update. Defaults to `params` unchanged.
    #[must_use]
    fn update_params(_id: u64, params: Params) -> Value {
        Value::Object(params)
    }

    /// Updates the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidId`] for `0`, without any request.
    /// Returns [`ResourceError::Http`] if the exchange fails.
    async fn update(
        conn: &Connection,
        id: u64,
        params: Params,
    ) -> Result<ApiResponse<Self::Record>, ResourceError> {
        let id = ensure_positive_id(id)?;

        let request = HttpRequest::builder(HttpMethod::Put, Self::update_url(id))
            .body(Self::update_params(id, params))
            .build()
            .map_err(HttpError::from)?;

        dispatch(conn, Self::NAME, "update", request).await
    }
}

/// Resources updated in batches.
#[allow(async_fn_in_trait)]
pub trait BulkUpdatable: Resource {
    /// Method used for bulk updates.
    const BULK_UPDATE_METHOD: HttpMethod = HttpMethod::Put;

    /// Updates every record in `params`; each entry carries its own `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::EmptyParams`] if `params` is empty.
    /// Returns [`ResourceError::Http`] if the exchange fails.
    async fn bulk_update(
        conn: &Connection,
        params: Vec<Params>,
    ) -> Result<ApiResponse<Self::Record>, ResourceError> {
        if params.is_empty() {
            return Err(ParameterError::EmptyParams { name: "params" }.into());
        }

        let body: Vec<Value> = params.into_iter().map(Value::Object).collect();
        let request = HttpRequest::builder(Self::BULK_UPDATE_METHOD, Self::PATH)
            .body(Value::Array(body))
            .build()
            .map_err(HttpError::from)?;

        dispatch(conn, Self::NAME, "bulk_update", request).await
    }

    /// Updates the record with `id` through the bulk endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidId`] for `0`, without any request.
    /// Returns [`ResourceError::Http`] if the exchange fails.
    async fn update(
        conn: &Connection,
        id: u64,
        mut params: Params,
    ) -> Result<ApiResponse<Self::Record>, ResourceError> {
        let id = ensure_positive_id(id)?;
        params.insert("id".to_string(), Value::from(id));
        Self::bulk_update(conn, vec![params]).await
    }
}

/// Resources deleted one at a time.
#[allow(async_fn_in_trait)]
pub trait Deletable: Resource {
    /// Deletes the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidId`] for `0`, without any request.
    /// Returns [`ResourceError::Http`] if the exchange fails.
    async fn delete(
        conn: &Connection,
        id: u64,
    ) -> Result<ApiResponse<Self::Record>, ResourceError> {
        let id = ensure_positive_id(id)?;

        let request = HttpRequest::builder(HttpMethod::Delete, Self::member_url(id))
            .build()
            .map_err(HttpError::from)?;

        dispatch(conn, Self::NAME, "delete", request).await
    }
}

/// Resources deleted in batches.
#[allow(async_fn_in_trait)]
pub trait BulkDeletable: Resource {
    /// Deletes every record in `ids` with one `id:in` filtered request.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::EmptyIds`] if `ids` is empty and
    /// [`ParameterError::InvalidId`] if any id is `0`.
    /// Returns [`ResourceError::Http`] if the exchange fails.
    async fn bulk_delete(
        conn: &Connection,
        ids: &[u64],
    ) -> Result<ApiResponse<Self::Record>, ResourceError> {
        if ids.is_empty() {
            return Err(ParameterError::EmptyIds.into());
        }
        for id in ids {
            ensure_positive_id(*id)?;
        }

        let request = HttpRequest::builder(HttpMethod::Delete, Self::PATH)
            .query_param("id:in", join_ids(ids))
            .build()
            .map_err(HttpError::from)?;

        dispatch(conn, Self::NAME, "bulk_delete", request).await
    }

    /// Deletes the record with `id` through the bulk endpoint.
    ///
    /// # Errors
    ///
    /// See [`bulk_delete`](Self::bulk_delete).
    async fn delete(
        conn: &Connection,
        id: u64,
    ) -> Result<ApiResponse<Self::Record>, ResourceError> {
        Self::bulk_delete(conn, &[id]).await
    }
}

/// Sends `request` and normalizes whatever comes back.
async fn dispatch<R: FromRecord>(
    conn: &Connection,
    resource: &'static str,
    action: &'static str,
    request: HttpRequest,
) -> Result<ApiResponse<R>, ResourceError> {
    tracing::debug!(resource, action, path = %request.path, "Dispatching resource action");
    let response = conn.execute(request).await?;
    Ok(ApiResponse::from_http_response(response))
}
