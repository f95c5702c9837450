//! # 用户记录服务
//!
//! 基于 Axum + SQLx 的最小 CRUD 服务，四个端点各对应一条参数化 SQL：
//! - `POST /create`
//! - `GET /read`
//! - `PUT /update/:id`
//! - `DELETE /delete/:id`

pub mod app;
pub mod core;
pub mod infrastructure;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use app::user::{routes, AppState, MemoryUserRepository, PgUserRepository, UserRepository};
use infrastructure::{
    config::{Config, DatabaseConfig, StorageKind},
    database::DatabaseManager,
};

/// 组装路由
pub fn build_router(state: AppState) -> Router {
    routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 按配置创建存储
pub async fn build_repository(config: &DatabaseConfig) -> anyhow::Result<Arc<dyn UserRepository>> {
    match config.storage {
        StorageKind::Postgres => {
            let db = DatabaseManager::connect(config)
                .await
                .context("failed to connect to database")?;
            if config.init_schema {
                db.create_tables()
                    .await
                    .context("failed to create tables")?;
            }
            Ok(Arc::new(PgUserRepository::new(db.into_pool())))
        }
        StorageKind::Memory => {
            info!("Using in-memory storage, records are lost on exit");
            Ok(Arc::new(MemoryUserRepository::new()))
        }
    }
}

/// 启动服务，收到退出信号后优雅关闭并释放连接池
pub async fn run(config: Config) -> anyhow::Result<()> {
    let users = build_repository(&config.database).await?;
    let app = build_router(AppState::new(users.clone()));

    let listener = TcpListener::bind(config.server.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_address()))?;
    let addr = listener.local_addr()?;
    info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shutting down, closing store");
    users.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
