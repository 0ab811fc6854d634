//! 产品数据模型
//!
//! `Product` 是持久化文档本身，其余是三种线上形态：
//! 创建输入、完整输出、更新输出。

use chrono::{DateTime, Utc};
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 持久化的产品文档，`_id` 由存储在插入时分配
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    /// 首次更新前不存在
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// 创建输入
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductIn {
    pub name: String,
    pub price: f64,
}

impl ProductIn {
    /// 转成插入文档，标识由存储分配，时间戳留给更新流程
    pub fn to_document(&self) -> Document {
        doc! { "name": self.name.as_str(), "price": self.price }
    }
}

/// 完整输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOut {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Product> for ProductOut {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            updated_at: product.updated_at,
        }
    }
}

/// 部分更新输入，None 的字段不参与更新
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProductUpdate {
    /// 只收集显式给出的字段，构造 $set 内容
    pub fn set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        if let Some(price) = self.price {
            set.insert("price", price);
        }
        if let Some(updated_at) = &self.updated_at {
            set.insert("updated_at", updated_at.to_rfc3339());
        }
        set
    }
}

/// 更新输出，比完整输出窄一档（不含标识）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdateOut {
    pub name: String,
    pub price: f64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Product> for ProductUpdateOut {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            updated_at: product.updated_at,
        }
    }
}
