pub mod config;
pub mod infra;
pub mod telemetry;

pub use config::Config;
pub use infra::{DynamoDbTodoStore, InMemoryTodoStore, StoreError, TodoStore};
pub use telemetry::init_tracing;
