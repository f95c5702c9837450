//! 用户存储层
//!
//! 每个操作只执行一条参数化 SQL 语句，不开启事务。

use async_trait::async_trait;
use sqlx::postgres::PgPool;

use super::model::{User, UserPayload};
use crate::core::error::StoreError;

/// 用户存储抽象
///
/// `id` 以路径中的原始字符串传入，是否为合法整数由存储决定。
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, payload: UserPayload) -> Result<User, StoreError>;

    /// 返回全部记录，顺序由存储决定
    async fn read_all(&self) -> Result<Vec<User>, StoreError>;

    /// 覆盖 `name` 和 `email`；没有匹配行时返回 `Ok(None)`
    async fn update(&self, id: &str, payload: UserPayload) -> Result<Option<User>, StoreError>;

    /// 删除并返回被删除的记录；没有匹配行时返回 `Ok(None)`
    async fn delete(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// 释放底层资源
    async fn close(&self) {}
}

const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email";
const SELECT_USERS: &str = "SELECT id, name, email FROM users";
const UPDATE_USER: &str =
    "UPDATE users SET name = $1, email = $2 WHERE id = CAST($3 AS INTEGER) RETURNING id, name, email";
const DELETE_USER: &str = "DELETE FROM users WHERE id = CAST($1 AS INTEGER) RETURNING id, name, email";

/// 基于 PostgreSQL 连接池的实现
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, payload: UserPayload) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(INSERT_USER)
            .bind(payload.name)
            .bind(payload.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }

    async fn read_all(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(SELECT_USERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn update(&self, id: &str, payload: UserPayload) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(UPDATE_USER)
            .bind(payload.name)
            .bind(payload.email)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn delete(&self, id: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(DELETE_USER)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
