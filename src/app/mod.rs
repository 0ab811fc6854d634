//! 应用模块

pub mod product;

use std::time::Duration;

use axum::{middleware, response::Json, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use self::product::handler::{self, AppState};
use self::product::service::ProductService;
use crate::core::middleware::request_logging_middleware;

/// 组装应用：产品接口挂在 /products 前缀下，附带健康检查和通用中间件
pub fn create_app(product_service: ProductService) -> Router {
    let state = AppState { product_service };

    Router::new()
        .merge(handler::routes())
        .route("/health", get(health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(Duration::from_secs(30))),
        )
        .with_state(state)
}

/// 健康检查
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
