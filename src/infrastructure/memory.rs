//! 内存文档存储
//!
//! 用 `Vec<Document>` 模拟文档集合，插入顺序即默认返回顺序。
//! 只解释业务层会产生的过滤子集：顶层等值匹配和 `$gte`/`$lte`
//! 数值区间。测试和无数据库的本地运行使用这套实现。

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{from_document, Bson, Document};
use uuid::Uuid;

use super::store::{ProductStore, StoreError};
use crate::app::product::model::Product;

#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 判断单个文档是否命中过滤条件，空过滤命中所有文档
fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, condition)| match condition {
        Bson::Document(range) => {
            let value = match document.get(key).and_then(numeric) {
                Some(value) => value,
                None => return false,
            };
            range.iter().all(|(operator, bound)| {
                let bound = match numeric(bound) {
                    Some(bound) => bound,
                    None => return false,
                };
                match operator.as_str() {
                    "$gte" => value >= bound,
                    "$lte" => value <= bound,
                    _ => false,
                }
            })
        }
        other => document.get(key) == Some(other),
    })
}

/// 数值字段统一按 f64 比较，整型边界也能匹配浮点字段
fn numeric(value: &Bson) -> Option<f64> {
    match value {
        Bson::Double(value) => Some(*value),
        Bson::Int32(value) => Some(f64::from(*value)),
        Bson::Int64(value) => Some(*value as f64),
        _ => None,
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_one(&self, filter: Document) -> Result<Option<Product>, StoreError> {
        let documents = self.documents.lock().unwrap();
        documents
            .iter()
            .find(|document| matches_filter(document, &filter))
            .map(|document| from_document(document.clone()).map_err(StoreError::from))
            .transpose()
    }

    async fn find_many(
        &self,
        filter: Document,
        limit: usize,
    ) -> Result<Vec<Product>, StoreError> {
        let documents = self.documents.lock().unwrap();
        documents
            .iter()
            .filter(|document| matches_filter(document, &filter))
            .take(limit)
            .map(|document| from_document(document.clone()).map_err(StoreError::from))
            .collect()
    }

    async fn insert_one(&self, mut document: Document) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        document.insert("_id", id.to_string());
        self.documents.lock().unwrap().push(document);
        Ok(id)
    }

    async fn update_one(&self, filter: Document, set: Document) -> Result<u64, StoreError> {
        let mut documents = self.documents.lock().unwrap();
        match documents
            .iter_mut()
            .find(|document| matches_filter(document, &filter))
        {
            Some(document) => {
                for (key, value) in set {
                    document.insert(key, value);
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, filter: Document) -> Result<u64, StoreError> {
        let mut documents = self.documents.lock().unwrap();
        match documents
            .iter()
            .position(|document| matches_filter(document, &filter))
        {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
