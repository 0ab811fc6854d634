//! 产品接口集成测试
//!
//! 基于内存文档存储驱动完整的 HTTP 链路。

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use store_api::app::create_app;
use store_api::app::product::model::{ProductOut, ProductUpdateOut};
use store_api::app::product::service::ProductService;
use store_api::infrastructure::memory::MemoryStore;

fn test_server() -> TestServer {
    let service = ProductService::new(Arc::new(MemoryStore::new()));
    TestServer::new(create_app(service)).unwrap()
}

async fn create_product(server: &TestServer, name: &str, price: f64) -> ProductOut {
    let response = server
        .post("/products/")
        .json(&json!({ "name": name, "price": price }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<ProductOut>()
}

#[tokio::test]
async fn create_returns_full_product() {
    let server = test_server();
    let product = create_product(&server, "机械键盘", 299.0).await;

    assert!(!product.id.is_nil());
    assert_eq!(product.name, "机械键盘");
    assert_eq!(product.price, 299.0);
    assert!(product.updated_at.is_none());
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let server = test_server();
    create_product(&server, "机械键盘", 299.0).await;

    let response = server
        .post("/products/")
        .json(&json!({ "name": "机械键盘", "price": 199.0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("机械键盘"));
}

#[tokio::test]
async fn get_round_trips_created_product() {
    let server = test_server();
    let created = create_product(&server, "机械键盘", 299.0).await;

    let response = server.get(&format!("/products/{}", created.id)).await;
    response.assert_status_ok();

    let fetched: ProductOut = response.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let server = test_server();
    let id = Uuid::new_v4();

    let response = server.get(&format!("/products/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains(&id.to_string()));
}

#[tokio::test]
async fn malformed_id_is_a_client_error() {
    let server = test_server();

    let response = server.get("/products/not-a-uuid").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn query_filters_by_inclusive_price_range() {
    let server = test_server();
    create_product(&server, "鼠标", 59.0).await;
    create_product(&server, "键盘", 150.0).await;
    create_product(&server, "耳机", 200.0).await;
    create_product(&server, "显示器", 1200.0).await;

    let response = server
        .get("/products/")
        .add_query_param("min_price", 100.0)
        .add_query_param("max_price", 200.0)
        .await;
    response.assert_status_ok();

    let products: Vec<ProductOut> = response.json();
    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["键盘", "耳机"]);
}

#[tokio::test]
async fn inverted_range_yields_empty_list() {
    let server = test_server();
    create_product(&server, "键盘", 150.0).await;

    let response = server
        .get("/products/")
        .add_query_param("min_price", 200.0)
        .add_query_param("max_price", 100.0)
        .await;
    response.assert_status_ok();

    let products: Vec<ProductOut> = response.json();
    assert!(products.is_empty());
}

#[tokio::test]
async fn query_without_bounds_returns_all_in_insertion_order() {
    // 内存存储的默认顺序是插入顺序
    let server = test_server();
    create_product(&server, "鼠标", 59.0).await;
    create_product(&server, "键盘", 150.0).await;
    create_product(&server, "显示器", 1200.0).await;

    let response = server.get("/products/").await;
    response.assert_status_ok();

    let products: Vec<ProductOut> = response.json();
    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["鼠标", "键盘", "显示器"]);
}

#[tokio::test]
async fn query_caps_results_at_100() {
    let server = test_server();
    for index in 0..110 {
        create_product(&server, &format!("产品-{}", index), 10.0).await;
    }

    let response = server.get("/products/").await;
    response.assert_status_ok();

    let products: Vec<ProductOut> = response.json();
    assert_eq!(products.len(), 100);
}

#[tokio::test]
async fn partial_update_touches_only_given_fields() {
    let server = test_server();
    let created = create_product(&server, "机械键盘", 299.0).await;

    let before = Utc::now();
    let response = server
        .patch(&format!("/products/{}", created.id))
        .json(&json!({ "price": 259.0 }))
        .await;
    response.assert_status_ok();

    let updated: ProductUpdateOut = response.json();
    assert_eq!(updated.name, "机械键盘");
    assert_eq!(updated.price, 259.0);

    let updated_at = updated.updated_at.expect("更新后必须带时间戳");
    assert!(updated_at >= before);
}

#[tokio::test]
async fn explicit_timestamp_is_stored_verbatim() {
    let server = test_server();
    let created = create_product(&server, "机械键盘", 299.0).await;

    let supplied: DateTime<Utc> = "2020-05-20T12:00:00Z".parse().unwrap();
    let response = server
        .patch(&format!("/products/{}", created.id))
        .json(&json!({ "updated_at": supplied }))
        .await;
    response.assert_status_ok();

    let updated: ProductUpdateOut = response.json();
    assert_eq!(updated.updated_at, Some(supplied));
}

#[tokio::test]
async fn update_is_visible_on_subsequent_get() {
    let server = test_server();
    let created = create_product(&server, "机械键盘", 299.0).await;

    server
        .patch(&format!("/products/{}", created.id))
        .json(&json!({ "name": "静电容键盘" }))
        .await
        .assert_status_ok();

    let response = server.get(&format!("/products/{}", created.id)).await;
    response.assert_status_ok();

    let fetched: ProductOut = response.json();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "静电容键盘");
    assert_eq!(fetched.price, 299.0);
}

#[tokio::test]
async fn update_unknown_id_returns_404() {
    let server = test_server();

    let response = server
        .patch(&format!("/products/{}", Uuid::new_v4()))
        .json(&json!({ "price": 1.0 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let server = test_server();
    let created = create_product(&server, "机械键盘", 299.0).await;

    let response = server.delete(&format!("/products/{}", created.id)).await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let response = server.delete(&format!("/products/{}", created.id)).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.get(&format!("/products/{}", created.id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}
