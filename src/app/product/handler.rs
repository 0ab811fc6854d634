//! 产品处理器

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use super::model::{ProductIn, ProductOut, ProductUpdate, ProductUpdateOut};
use super::service::ProductService;
use crate::core::error::CoreError;

/// 应用状态，业务服务在启动时注入
#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// 价格区间查询参数，min > max 合法，结果为空列表
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// 产品路由，挂载在 /products 前缀下
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products/", get(query_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<ProductIn>,
) -> Result<(StatusCode, Json<ProductOut>), CoreError> {
    let product = state.product_service.create(body).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductOut>, CoreError> {
    let product = state.product_service.get(id).await?;
    Ok(Json(product))
}

pub async fn query_products(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<Vec<ProductOut>>, CoreError> {
    let products = state
        .product_service
        .query(query.min_price, query.max_price)
        .await?;
    Ok(Json(products))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut body): Json<ProductUpdate>,
) -> Result<Json<ProductUpdateOut>, CoreError> {
    // 调用方不给时间戳时在这里补当前时间，保证每次更新都会推进
    if body.updated_at.is_none() {
        body.updated_at = Some(Utc::now());
    }

    let product = state.product_service.update(id, body).await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, CoreError> {
    state.product_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
