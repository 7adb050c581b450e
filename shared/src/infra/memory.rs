use super::{StoreError, TodoStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use todo_domain::{Todo, TodoId};

/// 簡易な InMemory 実装（開発/テスト用）
#[derive(Default)]
pub struct InMemoryTodoStore {
    todos: Mutex<HashMap<TodoId, Todo>>,
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn insert(&self, todo: &Todo) -> Result<(), StoreError> {
        let mut map = self.todos.lock().unwrap();
        if map.contains_key(&todo.todo_id) {
            return Err(StoreError::AlreadyExists(todo.todo_id));
        }
        map.insert(todo.todo_id, todo.clone());
        Ok(())
    }

    async fn find(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let map = self.todos.lock().unwrap();
        Ok(map.get(&id).cloned())
    }

    async fn replace(&self, todo: &Todo) -> Result<(), StoreError> {
        let mut map = self.todos.lock().unwrap();
        match map.get_mut(&todo.todo_id) {
            Some(slot) => {
                *slot = todo.clone();
                Ok(())
            }
            None => Err(StoreError::ConcurrentModification),
        }
    }

    async fn remove(&self, id: TodoId) -> Result<(), StoreError> {
        let mut map = self.todos.lock().unwrap();
        map.remove(&id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let map = self.todos.lock().unwrap();
        Ok(map.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str) -> Todo {
        Todo::create(TodoId::new(), title.into(), String::new(), false)
    }

    #[tokio::test]
    async fn insert_then_find_returns_record() {
        let store = InMemoryTodoStore::default();
        let todo = sample("A");
        store.insert(&todo).await.unwrap();
        let found = store.find(todo.todo_id).await.unwrap();
        assert_eq!(found, Some(todo));
    }

    #[tokio::test]
    async fn insert_duplicate_key_is_rejected() {
        let store = InMemoryTodoStore::default();
        let todo = sample("A");
        store.insert(&todo).await.unwrap();
        let err = store.insert(&todo).await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(id) if id == todo.todo_id));
    }

    #[tokio::test]
    async fn replace_of_missing_row_signals_conflict() {
        let store = InMemoryTodoStore::default();
        let err = store.replace(&sample("A")).await.unwrap_err();
        assert!(matches!(err, StoreError::ConcurrentModification));
    }

    #[tokio::test]
    async fn replace_overwrites_whole_record() {
        let store = InMemoryTodoStore::default();
        let mut todo = sample("A");
        store.insert(&todo).await.unwrap();

        todo.title = "B".into();
        todo.completed = true;
        store.replace(&todo).await.unwrap();

        let found = store.find(todo.todo_id).await.unwrap().unwrap();
        assert_eq!(found.title, "B");
        assert!(found.completed);
    }

    #[tokio::test]
    async fn remove_then_find_returns_none() {
        let store = InMemoryTodoStore::default();
        let todo = sample("A");
        store.insert(&todo).await.unwrap();
        store.remove(todo.todo_id).await.unwrap();
        assert!(store.find(todo.todo_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_returns_all_records() {
        let store = InMemoryTodoStore::default();
        for title in ["A", "B", "C"] {
            store.insert(&sample(title)).await.unwrap();
        }
        assert_eq!(store.list().await.unwrap().len(), 3);
    }
}
