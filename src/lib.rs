//! # 产品目录服务
//!
//! 基于 Axum 和文档存储的产品目录服务，提供产品的创建、查询、
//! 更新、删除等 HTTP 接口：
//! - HTTP 层：请求解析、时间戳注入、错误到状态码的映射
//! - 业务层：名称唯一性、价格区间过滤、稀疏更新
//! - 存储层：MongoDB 与内存两种文档集合实现

pub mod app;
pub mod core;
pub mod infrastructure;
