mod dynamodb;
mod memory;

pub use dynamodb::DynamoDbTodoStore;
pub use memory::InMemoryTodoStore;

use async_trait::async_trait;
use thiserror::Error;
use todo_domain::{Todo, TodoId};

/// ストア層のエラー
#[derive(Debug, Error)]
pub enum StoreError {
    /// 書き込み衝突（楽観的ロック失敗）
    #[error("Concurrent modification detected")]
    ConcurrentModification,

    #[error("Todo already exists: {0}")]
    AlreadyExists(TodoId),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// 永続化ポートの最小抽象。
///
/// サービスはこのポート越しにのみ永続化へ触れる。衝突検出は
/// 実装側の責務で、`replace` が `ConcurrentModification` を返した
/// 場合の解釈（存在再確認）は呼び出し側が行う。
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// 新規レコードを挿入する。キー重複は `AlreadyExists`。
    async fn insert(&self, todo: &Todo) -> Result<(), StoreError>;

    /// ID でレコードを取得する。
    async fn find(&self, id: TodoId) -> Result<Option<Todo>, StoreError>;

    /// 既存レコードを全置換する。対象行が消えているなどの衝突は
    /// `ConcurrentModification` で通知する。
    async fn replace(&self, todo: &Todo) -> Result<(), StoreError>;

    /// レコードを削除する。存在しない ID は黙って成功する。
    async fn remove(&self, id: TodoId) -> Result<(), StoreError>;

    /// 全レコードを格納順で返す。
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;
}
