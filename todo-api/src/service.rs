use crate::error::ApiError;
use serde::Deserialize;
use shared::{StoreError, TodoStore};
use std::sync::Arc;
use todo_domain::{Todo, TodoId};
use tracing::{info, warn};

/// POST /todo のリクエストボディ。
/// `created` / `modified` はサーバ側で付与するため受け取らない。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    /// 未指定なら v4 UUID を採番する
    #[serde(default)]
    pub todo_id: Option<TodoId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Todo の CRUD を司るサービス。永続化はポート越しに委譲し、
/// リクエストをまたぐ状態は持たない。
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// 作成。`created` / `modified` を現在時刻で付与して挿入する。
    pub async fn create(&self, req: CreateTodoRequest) -> Result<Todo, ApiError> {
        let todo = Todo::create(
            req.todo_id.unwrap_or_default(),
            req.title,
            req.description,
            req.completed,
        );
        self.store.insert(&todo).await?;
        info!(todo_id = %todo.todo_id, "todo created");
        Ok(todo)
    }

    /// 全置換更新。id とボディの todoId の不一致はストアに触れる前に
    /// 弾く。衝突時は存在を再確認し、消えていれば NotFound、残って
    /// いれば衝突をそのまま返す（リトライしない）。
    pub async fn update(&self, id: TodoId, mut todo: Todo) -> Result<(), ApiError> {
        if id != todo.todo_id {
            return Err(ApiError::IdMismatch);
        }

        todo.touch();

        match self.store.replace(&todo).await {
            Ok(()) => {
                info!(todo_id = %id, "todo updated");
                Ok(())
            }
            Err(StoreError::ConcurrentModification) => {
                if self.store.find(id).await?.is_none() {
                    Err(ApiError::NotFound)
                } else {
                    warn!(todo_id = %id, "unresolved write conflict");
                    Err(ApiError::ConflictUnresolved)
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 削除。存在しない id は NotFound。
    pub async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        if self.store.find(id).await?.is_none() {
            return Err(ApiError::NotFound);
        }
        self.store.remove(id).await?;
        info!(todo_id = %id, "todo deleted");
        Ok(())
    }

    /// 全件取得（格納順、フィルタ・ページングなし）。
    pub async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        Ok(self.store.list().await?)
    }

    /// 単一取得。
    pub async fn get(&self, id: TodoId) -> Result<Todo, ApiError> {
        self.store.find(id).await?.ok_or(ApiError::NotFound)
    }
}
