use anyhow::Context;
use record_service::infrastructure::{config::Config, logger::Logger};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load config")?;

    // guard 释放后文件日志停止写入
    let _guard = Logger::init(&config.logging)?;

    info!("启动用户记录服务...");

    record_service::run(config).await.map_err(|e| {
        error!("Service stopped with error: {:#}", e);
        e
    })
}
