//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::infrastructure::store::StoreError;

/// 领域错误类型
#[derive(Debug)]
pub enum CoreError {
    /// 创建重名产品
    Conflict(String),
    /// 目标文档不存在
    NotFound(String),
    /// 存储或其他内部故障
    Internal(String),
}

/// 错误响应结构，4xx/5xx 统一返回 {"detail": ...}
#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::Conflict(msg) => write!(f, "冲突: {}", msg),
            CoreError::NotFound(msg) => write!(f, "未找到: {}", msg),
            CoreError::Internal(msg) => write!(f, "内部错误: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Internal(err.to_string())
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            CoreError::Internal(msg) => {
                tracing::error!("内部错误: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, axum::Json(ErrorDetail { detail })).into_response()
    }
}
