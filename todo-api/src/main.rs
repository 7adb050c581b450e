//! todo-api バイナリのエントリポイント
//! HTTP サーバを起動し、環境変数に応じてストア実装を選択します。

use shared::{Config, DynamoDbTodoStore, InMemoryTodoStore, TodoStore};
use std::sync::Arc;
use todo_api::{app_with_state, AppState};

#[tokio::main]
async fn main() {
    shared::init_tracing();

    let config = Config::from_env();

    // DYNAMODB_TABLE が設定されていれば DynamoDB、なければ InMemory
    let store: Arc<dyn TodoStore> = match &config.dynamodb_table {
        Some(table) => Arc::new(DynamoDbTodoStore::new(table.clone()).await),
        None => Arc::new(InMemoryTodoStore::default()),
    };

    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    tracing::info!(%addr, environment = %config.environment, "server starting");

    let router = app_with_state(AppState::new(store));
    axum::serve(listener, router)
        .await
        .expect("server error");
}
