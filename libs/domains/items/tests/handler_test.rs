//! Handler tests for the Items domain
//!
//! These drive the catalog router end to end against a freshly seeded
//! in-memory repository:
//! - Request deserialization and query validation
//! - Response bodies
//! - HTTP status codes for each failure mode

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ItemService::new(InMemoryItemRepository::seeded()))
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_items_skip_and_limit() {
    let response = app().oneshot(get("/items/?skip=1&limit=3")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Product 2", "Product 3", "Product 4"]);
}

#[tokio::test]
async fn test_list_items_defaults_and_out_of_range_skip() {
    let response = app().oneshot(get("/items/")).await.unwrap();
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 5);

    let response = app().oneshot(get("/items/?skip=50")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_list_items_rejects_zero_limit() {
    let response = app().oneshot(get("/items/?limit=0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_item_found() {
    let response = app().oneshot(get("/items/0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: ItemResponse = json_body(response.into_body()).await;
    assert_eq!(body.item, seed_items()[0]);
    assert!(!body.message.is_empty());
}

#[tokio::test]
async fn test_get_item_missing_is_404_with_detail() {
    let response = app().oneshot(get("/items/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Item with ID=99 not found.");
}

#[tokio::test]
async fn test_create_item_returns_id_and_snapshot() {
    let payload = json!({
        "name": "Foo",
        "description": "An optional description",
        "price": 45.2,
        "tax": 3.5
    });

    let response = app()
        .oneshot(with_json("POST", "/create_items/", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: CreatedItemResponse = json_body(response.into_body()).await;
    assert_eq!(body.id, 5);
    assert_eq!(body.item.name, "Foo");
    assert_eq!(body.items.len(), 6);
    assert_eq!(body.items[5], body.item);
}

#[tokio::test]
async fn test_create_item_duplicate_name_is_400() {
    let response = app()
        .oneshot(with_json(
            "POST",
            "/create_items/",
            json!({"name": "Product 3", "price": 1.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Item with name=Product 3 already exists.");
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_create_and_rename_accept_empty_name() {
    let app = app();

    let response = app
        .clone()
        .oneshot(with_json(
            "POST",
            "/create_items/",
            json!({"name": "", "price": 1.0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: CreatedItemResponse = json_body(response.into_body()).await;
    assert_eq!(body.id, 5);
    assert_eq!(body.item.name, "");

    let response = app
        .oneshot(with_json("PUT", "/update/1", json!({"name": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: ItemResponse = json_body(response.into_body()).await;
    assert_eq!(body.item.name, "");
}

#[tokio::test]
async fn test_create_item_missing_price_is_422() {
    let response = app()
        .oneshot(with_json("POST", "/create_items/", json!({"name": "No price"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_then_get_on_shared_state() {
    let app = app();

    let response = app
        .clone()
        .oneshot(with_json(
            "POST",
            "/create_items/",
            json!({"name": "Bar", "price": 9.99}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/items/5")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: ItemResponse = json_body(response.into_body()).await;
    assert_eq!(body.item, Item::new("Bar", 9.99));
}

#[tokio::test]
async fn test_update_item_partial_patch() {
    let response = app()
        .oneshot(with_json(
            "PUT",
            "/update/2",
            json!({"price": 40.0, "tax": 7.5}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: ItemResponse = json_body(response.into_body()).await;
    assert_eq!(body.item.name, "Product 3");
    assert_eq!(body.item.description.as_deref(), Some("This is Product 3"));
    assert_eq!(body.item.price, 40.0);
    assert_eq!(body.item.tax, Some(7.5));
}

#[tokio::test]
async fn test_update_item_explicit_null_clears_field() {
    let response = app()
        .oneshot(with_json("PUT", "/update/0", json!({"description": null})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: ItemResponse = json_body(response.into_body()).await;
    assert_eq!(body.item.description, None);
    assert_eq!(body.item.tax, Some(2.0));
}

#[tokio::test]
async fn test_update_item_missing_is_400() {
    let response = app()
        .oneshot(with_json("PUT", "/update/77", json!({"price": 1.0})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Item with ID=77 not found.");
}

#[tokio::test]
async fn test_delete_item_returns_removed_item() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/delete/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: ItemResponse = json_body(response.into_body()).await;
    assert_eq!(body.item, seed_items()[2]);

    let response = app.oneshot(get("/items/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_item_missing_is_400() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/delete/12")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_query_items_with_price_floor() {
    let response = app()
        .oneshot(get("/query/?skip=1&limit=3&price=20"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    let prices: Vec<f64> = items.iter().map(|i| i.price).collect();
    assert_eq!(prices, vec![35.0, 45.0, 50.0]);
}

#[tokio::test]
async fn test_query_items_constraint_violations_are_422() {
    for uri in [
        "/query/?skip=100",
        "/query/?limit=0",
        "/query/?limit=101",
        "/query/?price=0",
        "/query/?price=-5",
        "/query/?price=cheap",
    ] {
        let response = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "{uri} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_non_integer_item_id_is_422() {
    let response = app().oneshot(get("/items/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
