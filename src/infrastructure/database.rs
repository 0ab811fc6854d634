//! 数据库基础设施

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, from_document, Document},
    options::{ClientOptions, FindOptions, IndexOptions},
    Client, Collection, IndexModel,
};
use uuid::Uuid;

use super::config::Settings;
use super::store::{ProductStore, StoreError};
use crate::app::product::model::Product;

/// MongoDB 产品集合
pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    /// 按配置建立连接并定位产品集合
    pub async fn connect(settings: &Settings) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&settings.database_url).await?;
        options.app_name = Some(settings.project_name.clone());

        let client = Client::with_options(options)?;
        let collection = client
            .database(&settings.database_name)
            .collection::<Document>(&settings.collection_name);

        // 名称唯一索引，兜住业务层查重和插入之间的竞争窗口
        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        collection.create_index(index, None).await?;

        Ok(Self { collection })
    }
}

#[async_trait]
impl ProductStore for MongoStore {
    async fn find_one(&self, filter: Document) -> Result<Option<Product>, StoreError> {
        self.collection
            .find_one(filter, None)
            .await?
            .map(|document| from_document(document).map_err(StoreError::from))
            .transpose()
    }

    async fn find_many(
        &self,
        filter: Document,
        limit: usize,
    ) -> Result<Vec<Product>, StoreError> {
        let options = FindOptions::builder().limit(limit as i64).build();
        let mut cursor = self.collection.find(filter, options).await?;

        let mut products = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            products.push(from_document(document)?);
        }
        Ok(products)
    }

    async fn insert_one(&self, mut document: Document) -> Result<Uuid, StoreError> {
        // 标识在这里分配，调用方的文档不带 _id
        let id = Uuid::new_v4();
        document.insert("_id", id.to_string());
        self.collection.insert_one(document, None).await?;
        Ok(id)
    }

    async fn update_one(&self, filter: Document, set: Document) -> Result<u64, StoreError> {
        let result = self
            .collection
            .update_one(filter, doc! { "$set": set }, None)
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_one(&self, filter: Document) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(filter, None).await?;
        Ok(result.deleted_count)
    }
}
