//! 文档存储接口
//!
//! 把底层文档集合抽象为统一契约，过滤条件用 BSON 文档表达，
//! 业务层不接触具体驱动。

use async_trait::async_trait;
use mongodb::bson::Document;
use uuid::Uuid;

use crate::app::product::model::Product;

/// 文档集合契约
///
/// - `insert_one` 由存储分配并返回文档标识
/// - `update_one` 对命中文档应用 `$set`，返回命中数量
/// - `delete_one` 返回删除数量
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_one(&self, filter: Document) -> Result<Option<Product>, StoreError>;

    async fn find_many(&self, filter: Document, limit: usize)
        -> Result<Vec<Product>, StoreError>;

    async fn insert_one(&self, document: Document) -> Result<Uuid, StoreError>;

    async fn update_one(&self, filter: Document, set: Document) -> Result<u64, StoreError>;

    async fn delete_one(&self, filter: Document) -> Result<u64, StoreError>;
}

/// 存储层错误
#[derive(Debug)]
pub enum StoreError {
    /// 驱动故障（连接、读写）
    Driver(mongodb::error::Error),
    /// 文档解码失败
    Codec(mongodb::bson::de::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Driver(err) => write!(f, "存储驱动故障: {}", err),
            StoreError::Codec(err) => write!(f, "文档解码失败: {}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Driver(err) => Some(err),
            StoreError::Codec(err) => Some(err),
        }
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Driver(err)
    }
}

impl From<mongodb::bson::de::Error> for StoreError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        StoreError::Codec(err)
    }
}
