//! 核心响应处理模块

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::user::model::User;

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// 单条记录响应
///
/// 更新或删除没有匹配到任何行时，返回 200、JSON 内容类型和空响应体。
#[derive(Debug)]
pub struct RecordResponse(pub Option<User>);

impl IntoResponse for RecordResponse {
    fn into_response(self) -> Response {
        match self.0 {
            Some(user) => Json(user).into_response(),
            None => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn missing_record_is_empty_ok() {
        let response = RecordResponse(None).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn present_record_is_json_object() {
        let user = User {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        let response = RecordResponse(Some(user)).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "id": 7, "name": "Ada", "email": "ada@example.com" })
        );
    }
}
