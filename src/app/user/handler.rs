//! 用户处理器与路由表

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use tracing::debug;

use super::{
    model::{User, UserPayload},
    repository::UserRepository,
};
use crate::core::{error::CoreError, response::RecordResponse};

/// 处理器共享状态，启动时显式构造后注入
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

/// 请求体不是合法 JSON 时按空字段处理，交给存储层拒绝
fn payload_or_empty(body: Result<Json<UserPayload>, JsonRejection>) -> UserPayload {
    match body {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            debug!("请求体无法解析，按空字段处理: {}", rejection);
            UserPayload::default()
        }
    }
}

/// POST /create
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<User>, CoreError> {
    let user = state.users.create(payload_or_empty(body)).await?;
    debug!("Created user {}", user.id);
    Ok(Json(user))
}

/// GET /read
pub async fn read_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, CoreError> {
    let users = state.users.read_all().await?;
    Ok(Json(users))
}

/// PUT /update/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<RecordResponse, CoreError> {
    let user = state.users.update(&id, payload_or_empty(body)).await?;
    Ok(RecordResponse(user))
}

/// DELETE /delete/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<RecordResponse, CoreError> {
    let user = state.users.delete(&id).await?;
    Ok(RecordResponse(user))
}

/// 用户路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_user))
        .route("/read", get(read_users))
        .route("/update/:id", put(update_user))
        .route("/delete/:id", delete(delete_user))
}

