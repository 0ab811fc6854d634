//! 产品目录服务入口

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use store_api::app::create_app;
use store_api::app::product::service::ProductService;
use store_api::infrastructure::config::Settings;
use store_api::infrastructure::database::MongoStore;
use store_api::infrastructure::logger::Logger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Logger::init();

    let settings = Settings::from_env();
    info!("启动 {} ...", settings.project_name);

    let store = MongoStore::connect(&settings).await?;
    let service = ProductService::new(Arc::new(store));
    let app = create_app(service);

    let listener = TcpListener::bind(&settings.bind_address).await?;
    info!("🚀 服务运行在 http://{}", listener.local_addr()?);
    info!("📖 API 端点:");
    info!("   POST   /products/     - 创建产品");
    info!("   GET    /products/     - 按价格区间查询 (?min_price=&max_price=)");
    info!("   GET    /products/:id  - 获取产品");
    info!("   PATCH  /products/:id  - 部分更新产品");
    info!("   DELETE /products/:id  - 删除产品");
    info!("   GET    /health        - 健康检查");

    axum::serve(listener, app).await?;
    Ok(())
}
