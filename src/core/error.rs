//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use super::response::ErrorBody;

/// 返回给调用方的统一错误信息，不区分错误类别
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// PostgreSQL 驱动返回的错误（连接、约束、语法、类型等）
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 内存存储模拟的约束拒绝
    #[error("store rejected statement: {0}")]
    Rejected(String),

    /// 内存存储不可用（锁中毒）
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// 处理器错误类型
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("store operation failed: {0}")]
    StoreOperationFailed(#[from] StoreError),
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match &self {
            CoreError::StoreOperationFailed(source) => {
                error!("Store operation failed: {}", source);
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new(GENERIC_ERROR_MESSAGE)),
        )
            .into_response()
    }
}
