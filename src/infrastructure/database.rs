//! 数据库基础设施

use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    Error,
};
use tracing::info;

use super::config::DatabaseConfig;

/// `users` 表结构
pub const SCHEMA: &str = include_str!("../../schema.sql");

/// 连接池管理器，连接池参数使用驱动默认值
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// 建立连接池并立即验证连接
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Error> {
        info!("Connecting to database: {}", config.redacted_url());
        let pool = PgPoolOptions::new().connect(&config.url).await?;
        Ok(Self { pool })
    }

    /// 创建表（幂等）
    pub async fn create_tables(&self) -> Result<(), Error> {
        info!("Creating database tables...");
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn into_pool(self) -> PgPool {
        self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
