//! 服务配置

use std::env;

/// 服务配置，所有字段支持环境变量覆盖
#[derive(Debug, Clone)]
pub struct Settings {
    /// 项目名称
    pub project_name: String,
    /// HTTP 监听地址
    pub bind_address: String,
    /// MongoDB 连接串
    pub database_url: String,
    /// 数据库名
    pub database_name: String,
    /// 产品集合名
    pub collection_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: "store-api".to_string(),
            bind_address: "127.0.0.1:3000".to_string(),
            database_url: "mongodb://localhost:27017".to_string(),
            database_name: "store".to_string(),
            collection_name: "products".to_string(),
        }
    }
}

impl Settings {
    /// 从环境变量读取配置，缺失项回落到 Default
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or(defaults.project_name),
            bind_address: env::var("BIND_ADDR").unwrap_or(defaults.bind_address),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_name: env::var("DATABASE_NAME").unwrap_or(defaults.database_name),
            collection_name: env::var("COLLECTION_NAME").unwrap_or(defaults.collection_name),
        }
    }
}
