//! 用户数据模型

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 用户记录，对应 `users` 表中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// 创建 / 更新请求体
///
/// 字段缺失或为 `null` 时保持 `None`，原样交给存储层，由 NOT NULL 约束拒绝。
/// 非字符串的值按文本传给存储层，不做类型检查。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(default, deserialize_with = "as_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "as_text")]
    pub email: Option<String>,
}

fn as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_keeps_missing_fields_as_none() {
        let payload: UserPayload = serde_json::from_str(r#"{"name":"John Doe"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("John Doe"));
        assert_eq!(payload.email, None);
    }

    #[test]
    fn non_string_values_become_text() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"name":123,"email":true}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("123"));
        assert_eq!(payload.email.as_deref(), Some("true"));

        let payload: UserPayload =
            serde_json::from_str(r#"{"name":null,"email":"a@b.c"}"#).unwrap();
        assert_eq!(payload.name, None);
        assert_eq!(payload.email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn user_serializes_in_column_order() {
        let user = User {
            id: 1,
            name: "John Doe".to_string(),
            email: "johndoe@example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"id":1,"name":"John Doe","email":"johndoe@example.com"}"#
        );
    }
}
