//! Integration tests for `CatalogClient` using wiremock HTTP mocks.

use rust_decimal::Decimal;
use shopctl_client::{
    ApiError, CatalogClient, CategoryInput, CategoryQuery, Credentials, DeliveryInput, ListQuery,
};
use shopctl_core::Product;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials {
        api_key: "test-key".to_owned(),
        logistics_api_key: Some("logistics-key".to_owned()),
    }
}

fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::new(base_url, credentials(), 30).expect("client construction should not fail")
}

fn category_json(id: i64, parent_id: Option<i64>, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "slug": name.to_lowercase(),
        "parent_id": parent_id,
    })
}

fn product(id: i64, name: &str) -> Product {
    Product {
        id,
        name: name.to_owned(),
        slug: name.to_lowercase(),
        sku: None,
        brand_id: None,
        category_ids: Vec::new(),
        price: Decimal::new(1990, 2),
        currency: "USD".to_owned(),
        is_active: true,
        created_at: None,
        variants: Vec::new(),
        attributes: Vec::new(),
    }
}

#[tokio::test]
async fn list_categories_sends_api_key_and_decodes_envelope() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "data": [
            category_json(1, None, "Clothing"),
            category_json(2, Some(1), "Shirts"),
        ],
        "meta": { "total": 2, "has_next": false }
    });

    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(header("X-API-Key", "test-key"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .list_categories(&CategoryQuery::default())
        .await
        .expect("should decode envelope");

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "Clothing");
    assert_eq!(page.items[1].parent_id, Some(1));
    let meta = page.meta.expect("meta should be present");
    assert_eq!(meta.total, Some(2));
    assert_eq!(meta.has_next, Some(false));
}

#[tokio::test]
async fn list_categories_accepts_bare_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([category_json(1, None, "Clothing")])),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .list_categories(&CategoryQuery::default())
        .await
        .expect("should decode bare array");

    assert_eq!(page.items.len(), 1);
    assert!(page.meta.is_none());
}

#[tokio::test]
async fn list_categories_forwards_filter_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(query_param("active_only", "true"))
        .and(query_param("parent_only", "true"))
        .and(query_param("lang", "de"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = CategoryQuery {
        active_only: true,
        parent_only: true,
        lang: Some("de".to_owned()),
        ..CategoryQuery::default()
    };
    let page = client
        .list_categories(&query)
        .await
        .expect("filters should be accepted");
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn get_category_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.get_category(99).await;

    assert!(
        matches!(result, Err(ApiError::NotFound { .. })),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn create_category_posts_only_set_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/categories"))
        .and(header("X-API-Key", "test-key"))
        .and(body_json(serde_json::json!({ "name": "Drinks", "slug": "drinks" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(category_json(5, None, "Drinks")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let input = CategoryInput {
        name: Some("Drinks".to_owned()),
        slug: Some("drinks".to_owned()),
        ..CategoryInput::default()
    };
    let created = client
        .create_category(&input)
        .await
        .expect("create should succeed");

    assert_eq!(created.id, 5);
    assert_eq!(created.name, "Drinks");
}

#[tokio::test]
async fn delete_category_sends_force_flag_and_accepts_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/categories/7"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .delete_category(7, true)
        .await
        .expect("delete should tolerate an empty body");
}

#[tokio::test]
async fn deliveries_authenticate_with_the_logistics_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/deliveries"))
        .and(header("X-API-Key", "logistics-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "name": "Standard", "price": "4.90" }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .list_deliveries(&ListQuery::default())
        .await
        .expect("logistics key should be accepted");

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Standard");
}

#[tokio::test]
async fn update_delivery_puts_with_the_logistics_key() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/deliveries/3"))
        .and(header("X-API-Key", "logistics-key"))
        .and(body_json(serde_json::json!({ "price": "6.50" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
            { "id": 3, "name": "Express", "price": "6.50" }
        )))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let input = DeliveryInput {
        price: Some(Decimal::new(650, 2)),
        ..DeliveryInput::default()
    };
    let updated = client
        .update_delivery(3, &input)
        .await
        .expect("update should succeed");

    assert_eq!(updated.price, Decimal::new(650, 2));
}

#[tokio::test]
async fn unexpected_envelope_shape_is_rejected_loudly() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.list_categories(&CategoryQuery::default()).await;

    assert!(
        matches!(result, Err(ApiError::UnexpectedShape { .. })),
        "expected UnexpectedShape, got: {result:?}"
    );
}

#[tokio::test]
async fn server_error_maps_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.list_brands(&ListQuery::default()).await;

    assert!(
        matches!(result, Err(ApiError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

#[tokio::test]
async fn upload_image_returns_the_stored_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/uploads"))
        .and(header("X-API-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
            { "url": "https://cdn.shop.test/images/logo.png" }
        )))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let url = client
        .upload_image("logo.png", vec![0xFF, 0xD8, 0xFF], "image/jpeg")
        .await
        .expect("upload should succeed");

    assert_eq!(url, "https://cdn.shop.test/images/logo.png");
}

#[tokio::test]
async fn fetch_form_references_joins_brands_and_categories() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "name": "Acme", "slug": "acme" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [category_json(1, None, "Clothing")]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let references = client
        .fetch_form_references()
        .await
        .expect("prefetch should succeed");

    assert_eq!(references.brands.len(), 1);
    assert_eq!(references.brands[0].name, "Acme");
    assert_eq!(references.categories.len(), 1);
}

#[tokio::test]
async fn fetch_stock_levels_degrades_per_row() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/1/stock"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
            { "product_id": 1, "quantity": 10, "reserved": 2 }
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products/2/stock"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products/3/stock"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
            { "product_id": 3, "quantity": 0 }
        )))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = vec![product(1, "A"), product(2, "B"), product(3, "C")];
    let levels = client.fetch_stock_levels(&products).await;

    assert_eq!(levels.len(), 3);
    assert_eq!(levels[0].as_ref().map(|l| l.available()), Some(8));
    assert!(levels[1].is_none(), "failed lookup should degrade to None");
    assert_eq!(levels[2].as_ref().map(|l| l.available()), Some(0));
}
