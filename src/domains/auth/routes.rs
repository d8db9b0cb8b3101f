// Auth domain routes
// 인증 도메인 라우터
use axum::{routing::post, Router};
use crate::domains::auth::handlers::auth_handler;
use crate::routes::fallback::method_not_allowed;
use crate::shared::services::AppState;

/// Create authentication router
/// 인증 라우터 생성
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth_handler::register).fallback(method_not_allowed))
        .route("/login", post(auth_handler::login).fallback(method_not_allowed))
}
