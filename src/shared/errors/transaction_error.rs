use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 거래 관련 에러
/// Transaction-related errors
#[derive(Error, Debug)]
pub enum TransactionError {
    /// 필수 필드 누락
    /// Required fields missing
    #[error("Required fields: {0}")]
    MissingFields(&'static str),

    /// tipo 는 "Ingreso" 또는 "Gasto" 만 허용
    #[error(r#"Field tipo must be "Ingreso" or "Gasto""#)]
    InvalidKind,

    /// 사용자 소유가 아닌 카테고리
    /// Category does not exist or belongs to another user
    #[error("Category not found: id={id}")]
    UnknownCategory { id: u64 },

    /// 수정할 필드 없음
    /// Update request carries no field to change
    #[error("No fields to update")]
    NothingToUpdate,

    /// 거래를 찾을 수 없음
    /// Transaction not found (or owned by another user)
    #[error("Transaction not found: id={id}")]
    NotFound { id: u64 },

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// TransactionError를 HTTP 응답으로 변환
impl From<TransactionError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: TransactionError) -> Self {
        let status = match &err {
            TransactionError::MissingFields(_)
            | TransactionError::InvalidKind
            | TransactionError::UnknownCategory { .. }
            | TransactionError::NothingToUpdate => StatusCode::BAD_REQUEST,
            TransactionError::NotFound { .. } => StatusCode::NOT_FOUND,
            TransactionError::DatabaseError(_) => {
                tracing::error!(error = %err, "transaction request failed");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to process transactions" })),
                );
            }
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
