//! 产品业务服务
//!
//! 唯一承载业务规则的一层：名称唯一性、插入后回读、
//! 价格区间过滤、稀疏更新与命中数检查。

use std::sync::Arc;

use mongodb::bson::{doc, Document};
use tracing::info;
use uuid::Uuid;

use super::model::{ProductIn, ProductOut, ProductUpdate, ProductUpdateOut};
use crate::core::error::CoreError;
use crate::infrastructure::store::ProductStore;

/// 单次查询返回的文档上限
const QUERY_LIMIT: usize = 100;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// 创建产品：名称查重，插入，再按分配的标识回读
    ///
    /// 回读保证返回的是存储真正落盘的内容，而不是输入的回显。
    /// 查重和插入之间没有锁，重名竞争窗口交给存储的唯一索引兜底。
    pub async fn create(&self, body: ProductIn) -> Result<ProductOut, CoreError> {
        let existing = self.store.find_one(doc! { "name": body.name.as_str() }).await?;
        if existing.is_some() {
            return Err(CoreError::Conflict(format!("产品 '{}' 已存在", body.name)));
        }

        let id = self.store.insert_one(body.to_document()).await?;
        let created = self
            .store
            .find_one(doc! { "_id": id.to_string() })
            .await?
            .ok_or_else(|| CoreError::Internal(format!("插入后未能回读产品 {}", id)))?;

        info!("创建产品: {} ({})", created.name, created.id);
        Ok(ProductOut::from(created))
    }

    pub async fn get(&self, id: Uuid) -> Result<ProductOut, CoreError> {
        let product = self
            .store
            .find_one(doc! { "_id": id.to_string() })
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        Ok(ProductOut::from(product))
    }

    /// 按价格区间查询，上下界都是闭区间，最多返回 QUERY_LIMIT 条
    ///
    /// min > max 时过滤器自然落空，返回空列表而不是错误。
    pub async fn query(
        &self,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Result<Vec<ProductOut>, CoreError> {
        let mut filter = Document::new();
        if min_price.is_some() || max_price.is_some() {
            let mut range = Document::new();
            if let Some(min) = min_price {
                range.insert("$gte", min);
            }
            if let Some(max) = max_price {
                range.insert("$lte", max);
            }
            filter.insert("price", range);
        }

        let products = self.store.find_many(filter, QUERY_LIMIT).await?;
        Ok(products.into_iter().map(ProductOut::from).collect())
    }

    /// 稀疏更新：只下发显式给出的字段，未命中即 NotFound
    pub async fn update(
        &self,
        id: Uuid,
        body: ProductUpdate,
    ) -> Result<ProductUpdateOut, CoreError> {
        let matched = self
            .store
            .update_one(doc! { "_id": id.to_string() }, body.set_document())
            .await?;
        if matched == 0 {
            return Err(Self::not_found(id));
        }

        let updated = self
            .store
            .find_one(doc! { "_id": id.to_string() })
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        info!("更新产品: {} ({})", updated.name, updated.id);
        Ok(ProductUpdateOut::from(updated))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let deleted = self
            .store
            .delete_one(doc! { "_id": id.to_string() })
            .await?;
        if deleted == 0 {
            return Err(Self::not_found(id));
        }

        info!("删除产品: {}", id);
        Ok(())
    }

    fn not_found(id: Uuid) -> CoreError {
        CoreError::NotFound(format!("ID 为 {} 的产品不存在", id))
    }
}
