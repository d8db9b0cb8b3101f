use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 카테고리 관련 에러
/// Category-related errors
#[derive(Error, Debug)]
pub enum CategoryError {
    #[error("Required fields: nombre, tipo")]
    MissingFields,

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// CategoryError를 HTTP 응답으로 변환
impl From<CategoryError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::MissingFields => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": err.to_string() })))
            }
            CategoryError::DatabaseError(_) => {
                tracing::error!(error = %err, "category request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to process categories" })),
                )
            }
        }
    }
}
