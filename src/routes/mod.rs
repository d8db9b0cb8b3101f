// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers
pub mod fallback;

use axum::Router;
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::auth::routes::create_auth_router;
use crate::domains::categories::routes::create_category_router;
use crate::domains::transactions::routes::create_transaction_router;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(create_auth_router())
        .nest("/categorias", create_category_router())
        .nest("/transacciones", create_transaction_router())
        .fallback(fallback::route_not_found)
}
