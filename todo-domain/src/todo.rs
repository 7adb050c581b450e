use crate::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(pub Uuid);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DomainError::InvalidTodoId(e.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 管理対象の Todo レコード。
///
/// `created` は作成時にサーバ側で一度だけ付与し、`modified` は
/// 更新のたびにサーバ側で打ち直す（最終書き込み時刻）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub todo_id: TodoId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Todo {
    /// 作成時コンストラクタ。両タイムスタンプを現在時刻で初期化する。
    pub fn create(todo_id: TodoId, title: String, description: String, completed: bool) -> Self {
        let now = Utc::now();
        Self {
            todo_id,
            title,
            description,
            completed,
            created: now,
            modified: now,
        }
    }

    /// 最終書き込み時刻を現在時刻に更新する。
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}
