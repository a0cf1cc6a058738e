//! End-to-end tests against the axum router over an in-memory database.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use stockroom::adapters::sqlite::create_migrated_test_pool;
use stockroom::api::{self, AppState};
use stockroom::Config;

async fn test_app() -> Router {
    let pool = create_migrated_test_pool().await.unwrap();
    api::router(AppState::new(pool, &Config::default()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_product_crud_roundtrip() {
    let app = test_app().await;

    let (status, category) = send(
        &app,
        "POST",
        "/categories",
        Some(json!({ "name": "Hardware", "description": "Tools and parts" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let category_id = category["id"].as_i64().unwrap();

    let (status, product) = send(
        &app,
        "POST",
        "/products",
        Some(json!({
            "name": "Drill",
            "description": "Cordless",
            "price": 60.0,
            "category_id": category_id,
            "stock_quantity": 5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(product["category"]["name"], "Hardware");
    let product_id = product["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Drill");

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/products/{product_id}"),
        Some(json!({ "price": 55.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 55.0);
    assert_eq!(updated["name"], "Drill");

    let (status, _) = send(&app, "DELETE", &format!("/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/products/{product_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_product_yields_400_with_messages() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "ab", "price": 0.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_product_listing_is_paginated() {
    let app = test_app().await;
    for i in 0..3 {
        let (status, _) = send(
            &app,
            "POST",
            "/products",
            Some(json!({ "name": format!("Product {i}"), "price": 1.0 + i as f64 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/products?page=2&page_size=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 2);
    assert_eq!(body["total_items"], 3);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["products"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_report_endpoint_filters_and_aggregates() {
    let app = test_app().await;
    for (name, price, stock) in [("Drill", 60.0, 5), ("Sander", 100.0, 10), ("Router", 140.0, 15), ("Lathe", 160.0, 2)] {
        send(
            &app,
            "POST",
            "/products",
            Some(json!({ "name": name, "price": price, "stock_quantity": stock })),
        )
        .await;
    }

    let (status, report) = send(
        &app,
        "GET",
        "/reports/products?min_price=50&max_price=150&sort_by=price&sort_order=desc",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["total_products"], 3);
    assert_eq!(report["total_stock"], 30);
    assert_eq!(report["avg_price"], 100.0);

    let products = report["products"].as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0]["price"], 140.0);

    // Same page coordinates are served from cache, parallel flag or not.
    let (status, parallel_report) = send(
        &app,
        "GET",
        "/reports/products?min_price=50&max_price=150&sort_by=price&sort_order=desc&parallel=true",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parallel_report, report);
}

#[tokio::test]
async fn test_report_parallel_strategy_over_http() {
    let app = test_app().await;
    send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Widget", "price": 9.5, "stock_quantity": 4 })),
    )
    .await;

    let (status, report) =
        send(&app, "GET", "/reports/products?parallel=true", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["total_products"], 1);
    assert_eq!(report["total_stock"], 4);
    assert_eq!(report["avg_price"], 9.5);
}

#[tokio::test]
async fn test_report_tolerates_garbage_parameters() {
    let app = test_app().await;

    let (status, report) = send(
        &app,
        "GET",
        "/reports/products?sort_by=__nonexistent__&sort_order=sideways&page=abc&page_size=xyz&category_id=none",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["total_products"], 0);
    assert_eq!(report["total_stock"], 0);
    assert_eq!(report["avg_price"], 0.0);
    assert!(report["products"].as_array().unwrap().is_empty());
}
