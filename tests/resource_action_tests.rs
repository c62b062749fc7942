//! Integration tests for resource actions.
//!
//! Each test sends one action through a real connection to a mock server
//! and checks both the request that went out and the normalized result.

use std::collections::HashMap;

use bigcommerce_api::rest::resources::{
    Address, CategoryTree, Customer, CustomerParams, EmailStatusSettings, Page, Wishlist,
};
use bigcommerce_api::rest::{
    BulkCreatable, BulkDeletable, BulkUpdatable, Creatable, Deletable, Listable, ParameterError,
    Params, ResourceError, Retrievable, Updatable,
};
use bigcommerce_api::validation::to_params;
use bigcommerce_api::{AccessToken, ApiHost, BigCommerceConfig, Connection, StoreHash};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn connection(server: &MockServer) -> Connection {
    let config = BigCommerceConfig::builder()
        .store_hash(StoreHash::new("abc123").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .api_host(ApiHost::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Connection::new(config).unwrap()
}

fn params(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

/// Returns the query pairs of the only request the server received.
async fn single_query(server: &MockServer) -> HashMap<String, String> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests[0].url.query_pairs().into_owned().collect()
}

// ============================================================================
// List and Retrieve
// ============================================================================

#[tokio::test]
async fn test_list_sends_limit_and_page_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 3, "email": "a@example.com"}, {"id": 4, "email": "b@example.com"}],
            "meta": {"pagination": {
                "total": 6, "count": 2, "per_page": 2, "current_page": 2, "total_pages": 3,
                "links": {"previous": "?limit=2&page=1", "current": "?limit=2&page=2", "next": "?limit=2&page=3"}
            }}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = Customer::list(&connection(&server), Params::new(), Some(2), Some(2))
        .await
        .unwrap();

    let expected: HashMap<String, String> = [("limit", "2"), ("page", "2")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(single_query(&server).await, expected);

    assert!(response.is_success());
    assert_eq!(response.len(), 2);
    assert_eq!(response.data().unwrap()[1].email(), Some("b@example.com"));
    assert_eq!(response.pagination().current_page.as_deref(), Some("2"));
    assert!(response.has_next_page());
}

#[tokio::test]
async fn test_list_passes_filters_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("name:like", "about"))
        .and(query_param("is_visible", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "meta": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let response = Page::list(
        &connection(&server),
        params(json!({"name:like": "about", "is_visible": true, "parent_id": null})),
        None,
        None,
    )
    .await
    .unwrap();

    assert!(!single_query(&server).await.contains_key("parent_id"));
    assert!(response.is_empty());
    assert!(response.pagination().is_empty());
}

#[tokio::test]
async fn test_retrieve_filters_the_collection_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/customers"))
        .and(query_param("id:in", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 42, "first_name": "Jane"}],
            "meta": {"pagination": {"total": 1}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = Customer::retrieve(&connection(&server), 42, Params::new())
        .await
        .unwrap();

    assert_eq!(response.first().and_then(|c| c.first_name()), Some("Jane"));
}

#[tokio::test]
async fn test_retrieve_uses_member_url_when_resource_has_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/content/pages/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": 7, "name": "About"}, "meta": {}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = Page::retrieve(&connection(&server), 7, Params::new())
        .await
        .unwrap();

    assert!(single_query(&server).await.is_empty());
    assert_eq!(response.len(), 1);
    assert_eq!(response.first().and_then(|p| p.name()), Some("About"));
}

#[tokio::test]
async fn test_retrieve_zero_never_sends_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = Customer::retrieve(&connection(&server), 0, Params::new()).await;

    assert!(matches!(
        result,
        Err(ResourceError::Parameter(ParameterError::InvalidId { id: 0 }))
    ));
}

// ============================================================================
// Create and Update
// ============================================================================

#[tokio::test]
async fn test_bulk_resource_create_wraps_params_in_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/customers"))
        .and(body_json(json!([{
            "email": "jane@example.com",
            "first_name": "Jane",
            "last_name": "Doe",
            "addresses": [{
                "first_name": "Jane",
                "last_name": "Doe",
                "address1": "1 Main St",
                "city": "Austin",
                "state_or_province": "Texas",
                "postal_code": "78701",
                "country_code": "US"
            }]
        }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 9, "email": "jane@example.com"}],
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let customer = CustomerParams {
        email: Some("jane@example.com".to_string()),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        addresses: Some(vec![Address {
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            address1: Some("1 Main St".to_string()),
            city: Some("Austin".to_string()),
            state_or_province: Some("Texas".to_string()),
            postal_code: Some("78701".to_string()),
            country_code: Some("US".to_string()),
            ..Default::default()
        }]),
        ..Default::default()
    };

    let response = Customer::create(&connection(&server), to_params(&customer).unwrap())
        .await
        .unwrap();

    assert_eq!(response.first().and_then(|c| c.id()), Some(9));
}

#[tokio::test]
async fn test_single_resource_create_posts_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/wishlists"))
        .and(body_json(json!({"customer_id": 4, "name": "Birthday"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": 1, "customer_id": 4}, "meta": {}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = Wishlist::create(
        &connection(&server),
        params(json!({"customer_id": 4, "name": "Birthday"})),
    )
    .await
    .unwrap();

    assert_eq!(response.first().and_then(|w| w.customer_id()), Some(4));
}

#[tokio::test]
async fn test_category_tree_bulk_create_upserts_with_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/catalog/trees"))
        .and(body_json(json!([{"name": "Main", "channels": [1]}])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "name": "Main", "channels": [1]}],
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = CategoryTree::bulk_create(
        &connection(&server),
        json!({"name": "Main", "channels": [1]}),
    )
    .await
    .unwrap();

    assert_eq!(response.first().map(|t| t.channels()), Some(vec![1]));
}

#[tokio::test]
async fn test_bulk_update_injects_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/content/pages"))
        .and(body_json(json!([{"name": "About us", "id": 7}])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 7, "name": "About us"}],
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = Page::update(&connection(&server), 7, params(json!({"name": "About us"})))
        .await
        .unwrap();

    assert!(response.is_success());
}

#[tokio::test]
async fn test_single_resource_update_puts_to_member_url() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/wishlists/3"))
        .and(body_json(json!({"is_public": true})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": 3, "is_public": true}, "meta": {}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = Wishlist::update(&connection(&server), 3, params(json!({"is_public": true})))
        .await
        .unwrap();

    assert_eq!(response.first().and_then(|w| w.is_public()), Some(true));
}

#[tokio::test]
async fn test_bulk_create_rejects_scalars_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = Page::bulk_create(&connection(&server), json!(["not an object"])).await;

    let error = result.unwrap_err();
    assert_eq!(
        error.to_string(),
        "Parameter 'params' should be an object or an array of objects, a string provided."
    );
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_bulk_delete_sends_id_in_filter() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/stores/abc123/v3/customers"))
        .and(query_param("id:in", "4,2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = Customer::bulk_delete(&connection(&server), &[4, 2])
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(response.status(), 204);
    assert!(response.data().is_none());
    assert!(response.error().is_none());
}

#[tokio::test]
async fn test_single_resource_delete_uses_member_url() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/stores/abc123/v3/wishlists/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = Wishlist::delete(&connection(&server), 3).await.unwrap();
    assert!(response.is_success());
}

// ============================================================================
// Failures and Singletons
// ============================================================================

#[tokio::test]
async fn test_api_failure_is_returned_as_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "status": 422,
            "title": "Input is invalid",
            "type": "https://developer.bigcommerce.com/api-docs/getting-started/api-status-codes",
            "errors": {".customer_id": "error.path.missing"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = Wishlist::create(&connection(&server), params(json!({"name": "x"})))
        .await
        .unwrap();

    assert!(!response.is_success());
    assert_eq!(response.status(), 422);
    assert!(response.data().is_none());
    let error = response.error().unwrap();
    assert_eq!(error.status.as_deref(), Some("422"));
    assert_eq!(error.title.as_deref(), Some("Input is invalid"));
    assert_eq!(
        error.errors,
        Some(json!({".customer_id": "error.path.missing"}))
    );
}

#[tokio::test]
async fn test_email_status_settings_fetch_and_save() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/settings/email-statuses"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"shipped": false, "completed": true}, "meta": {}})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/settings/email-statuses"))
        .and(body_json(json!({"shipped": true})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"shipped": true, "completed": true}, "meta": {}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let conn = connection(&server);

    let current = EmailStatusSettings::fetch(&conn).await.unwrap();
    assert_eq!(current.first().and_then(|s| s.get_bool("shipped")), Some(false));

    let saved = EmailStatusSettings::save(&conn, params(json!({"shipped": true})))
        .await
        .unwrap();
    assert_eq!(saved.first().and_then(|s| s.get_bool("shipped")), Some(true));
}
