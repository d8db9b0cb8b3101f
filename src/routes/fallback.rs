// 공통 fallback 핸들러
// Fallback handlers shared by every router
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 알 수 없는 경로
/// Unknown path
pub async fn route_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Route not found" })))
}

/// 경로는 있으나 지원하지 않는 메서드
/// Known path, unsupported method
pub async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(json!({ "error": "Method not allowed" })))
}
