//! 内存用户存储
//!
//! 与 `users` 表保持相同的可观察行为：自增 id 从 1 开始且不复用，
//! `name`/`email` 不能为空值，`id` 必须是整数语法。

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;

use super::{
    model::{User, UserPayload},
    repository::UserRepository,
};
use crate::core::error::StoreError;

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i32, User>,
    next_id: i32,
}

/// 进程内存储，适合本地运行与测试
#[derive(Debug)]
pub struct MemoryUserRepository {
    table: Mutex<Table>,
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, StoreError> {
        self.table
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

fn parse_id(id: &str) -> Result<i32, StoreError> {
    id.trim().parse::<i32>().map_err(|_| {
        StoreError::Rejected(format!("invalid input syntax for type integer: \"{}\"", id))
    })
}

fn required(value: Option<String>, column: &str) -> Result<String, StoreError> {
    value.ok_or_else(|| {
        StoreError::Rejected(format!(
            "null value in column \"{}\" of relation \"users\" violates not-null constraint",
            column
        ))
    })
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, payload: UserPayload) -> Result<User, StoreError> {
        let mut table = self.lock()?;
        let id = table.next_id;
        // 与 SERIAL 一致：即使约束检查失败，序列值也已消耗
        table.next_id = id.checked_add(1).ok_or_else(|| {
            StoreError::Rejected("nextval: reached maximum value of sequence".to_string())
        })?;

        let name = required(payload.name, "name")?;
        let email = required(payload.email, "email")?;
        let user = User { id, name, email };
        table.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn read_all(&self) -> Result<Vec<User>, StoreError> {
        let table = self.lock()?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update(&self, id: &str, payload: UserPayload) -> Result<Option<User>, StoreError> {
        let id = parse_id(id)?;
        let mut table = self.lock()?;

        // 约束只作用于被匹配到的行
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        let name = required(payload.name, "name")?;
        let email = required(payload.email, "email")?;
        row.name = name;
        row.email = email;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<User>, StoreError> {
        let id = parse_id(id)?;
        let mut table = self.lock()?;
        Ok(table.rows.remove(&id))
    }
}
