// Transactions domain routes
// 거래 도메인 라우터
use axum::{routing::get, Router};
use crate::domains::transactions::handlers::transaction_handler;
use crate::routes::fallback::method_not_allowed;
use crate::shared::services::AppState;

/// Create transaction router (모두 인증 필요)
pub fn create_transaction_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(transaction_handler::get_transactions)
                .post(transaction_handler::create_transaction)
                .put(transaction_handler::update_transaction)
                .delete(transaction_handler::delete_transaction)
                .fallback(method_not_allowed),
        )
        .route(
            "/:id",
            get(transaction_handler::get_transaction).fallback(method_not_allowed),
        )
}
