// Categories domain routes
// 카테고리 도메인 라우터
use axum::{routing::get, Router};
use crate::domains::categories::handlers::category_handler;
use crate::routes::fallback::method_not_allowed;
use crate::shared::services::AppState;

/// Create category router (모두 인증 필요)
pub fn create_category_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(category_handler::get_categories)
            .post(category_handler::create_category)
            .fallback(method_not_allowed),
    )
}
