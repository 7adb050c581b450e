use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::StoreError;
use thiserror::Error;

/// API 層のエラー。HTTP ステータスへの対応付けを持つ。
#[derive(Debug, Error)]
pub enum ApiError {
    /// パスの id が UUID として解釈できない
    #[error("Invalid todo id")]
    InvalidId(#[from] todo_domain::DomainError),

    /// パスの id とボディの todoId が一致しない
    #[error("Todo ID mismatch")]
    IdMismatch,

    #[error("Todo not found")]
    NotFound,

    /// 衝突を再確認しても行が残っていた場合。リトライせず上位へ返す。
    #[error("Unresolved concurrent modification")]
    ConflictUnresolved,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) | ApiError::IdMismatch => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::ConflictUnresolved | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            ApiError::InvalidId(_) => "invalid_id",
            ApiError::IdMismatch => "id_mismatch",
            ApiError::NotFound => "not_found",
            ApiError::ConflictUnresolved => "conflict",
            ApiError::Store(_) => "store",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (self.status(), Json(serde_json::json!({"error": self.tag()}))).into_response()
    }
}
