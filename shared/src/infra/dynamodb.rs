use super::{StoreError, TodoStore};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::{types::AttributeValue, Client};
use std::collections::HashMap;
use todo_domain::{Todo, TodoId};
use tracing::{error, info};

/// DynamoDB 実装。
///
/// 1 テーブル、`TodoId` 文字列をパーティションキーとし、レコード
/// 本体は `Data` 属性に JSON 文書として保存する。`replace` / `insert`
/// は条件式付き書き込みで、条件不成立を衝突シグナルに変換する。
pub struct DynamoDbTodoStore {
    client: Client,
    table_name: String,
}

impl DynamoDbTodoStore {
    pub async fn new(table_name: String) -> Self {
        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let client = Client::new(&aws_config);
        Self { client, table_name }
    }

    pub fn with_client(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }

    fn encode(todo: &Todo) -> Result<String, StoreError> {
        serde_json::to_string(todo).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn decode(item: &HashMap<String, AttributeValue>) -> Result<Todo, StoreError> {
        match item.get("Data") {
            Some(AttributeValue::S(data)) => {
                serde_json::from_str(data).map_err(|e| StoreError::Serialization(e.to_string()))
            }
            _ => Err(StoreError::Database("missing Data attribute".to_string())),
        }
    }
}

fn is_conditional_check_failed(message: &str) -> bool {
    message.contains("ConditionalCheckFailedException")
}

#[async_trait]
impl TodoStore for DynamoDbTodoStore {
    async fn insert(&self, todo: &Todo) -> Result<(), StoreError> {
        let data = Self::encode(todo)?;

        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .item("TodoId", AttributeValue::S(todo.todo_id.to_string()))
            .item("Data", AttributeValue::S(data))
            .item("UpdatedAt", AttributeValue::S(todo.modified.to_rfc3339()))
            .condition_expression("attribute_not_exists(TodoId)")
            .send()
            .await;

        match result {
            Ok(_) => {
                info!(todo_id = %todo.todo_id, "Todo saved successfully");
                Ok(())
            }
            Err(sdk_error) => {
                let message = sdk_error.to_string();
                if is_conditional_check_failed(&message) {
                    Err(StoreError::AlreadyExists(todo.todo_id))
                } else {
                    Err(StoreError::Database(message))
                }
            }
        }
    }

    async fn find(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let get_item_output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("TodoId", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        match get_item_output.item {
            Some(item) => Ok(Some(Self::decode(&item)?)),
            None => Ok(None),
        }
    }

    async fn replace(&self, todo: &Todo) -> Result<(), StoreError> {
        let data = Self::encode(todo)?;

        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .item("TodoId", AttributeValue::S(todo.todo_id.to_string()))
            .item("Data", AttributeValue::S(data))
            .item("UpdatedAt", AttributeValue::S(todo.modified.to_rfc3339()))
            .condition_expression("attribute_exists(TodoId)")
            .send()
            .await;

        match result {
            Ok(_) => {
                info!(todo_id = %todo.todo_id, "Todo replaced successfully");
                Ok(())
            }
            Err(sdk_error) => {
                let message = sdk_error.to_string();
                if is_conditional_check_failed(&message) {
                    Err(StoreError::ConcurrentModification)
                } else {
                    Err(StoreError::Database(message))
                }
            }
        }
    }

    async fn remove(&self, id: TodoId) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("TodoId", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        info!(todo_id = %id, "Todo removed");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let scan_output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut todos = Vec::new();

        if let Some(items) = scan_output.items {
            for item in items {
                match Self::decode(&item) {
                    Ok(todo) => todos.push(todo),
                    Err(e) => {
                        error!(error = %e, "Failed to deserialize todo");
                    }
                }
            }
        }

        Ok(todos)
    }
}
