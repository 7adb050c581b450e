//! Todo CRUD HTTP API（axum）
//!
//! 単一エンティティ `Todo` に対する 5 操作（作成・全置換更新・削除・
//! 一覧・単一取得）を提供します。永続化は `TodoStore` ポート越しに
//! 注入し、サービス自身はリクエストをまたぐ状態を持ちません。

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use shared::{InMemoryTodoStore, TodoStore};
use std::sync::Arc;
use todo_domain::{Todo, TodoId};

pub mod error;
pub mod service;

pub use error::ApiError;
pub use service::{CreateTodoRequest, TodoService};

/// ルータを構築して返します（InMemory ストア版）。
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// 外部からストアを注入できる版
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todo", get(list_todos).post(create_todo))
        .route(
            "/todo/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(state)
}

/// アプリケーションの共有状態
#[derive(Clone)]
pub struct AppState {
    service: TodoService,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self {
            service: TodoService::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryTodoStore::default()))
    }
}

/// ヘルスチェック用ハンドラ
async fn health() -> impl IntoResponse {
    let body = HealthBody { status: "ok" };
    (StatusCode::OK, Json(body))
}

/// Todo 作成ハンドラ
/// 成功時は 201 と `Location: /todo/{id}` を返す。
async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state.service.create(req).await?;
    let location = format!("/todo/{}", todo.todo_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(todo),
    ))
}

/// 全置換更新ハンドラ。成功時は 204。
async fn update_todo(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(todo): Json<Todo>,
) -> Result<StatusCode, ApiError> {
    let id = TodoId::parse(&id)?;
    state.service.update(id, todo).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 削除ハンドラ。成功時は 204。
async fn delete_todo(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let id = TodoId::parse(&id)?;
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 全件一覧ハンドラ
async fn list_todos(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let todos = state.service.list().await?;
    Ok((StatusCode::OK, Json(todos)))
}

/// 単一 Todo 取得ハンドラ
async fn get_todo(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let id = TodoId::parse(&id)?;
    let todo = state.service.get(id).await?;
    Ok((StatusCode::OK, Json(todo)))
}

#[derive(Debug, Serialize)]
struct HealthBody {
    /// サービスの簡易ステータス
    status: &'static str,
}
