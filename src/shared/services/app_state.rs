use std::sync::Arc;
use crate::shared::database::Database;
use crate::shared::clients::IdentityProvider;
use crate::domains::auth::services::{AuthState, TokenService};
use crate::domains::categories::services::CategoryState;
use crate::domains::transactions::services::TransactionState;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 요청 간 공유되는 가변 상태 없음: 풀, 토큰 서비스, ID 제공자 클라이언트만 보관
#[derive(Clone)]
pub struct AppState {
    pub auth_state: AuthState,
    pub category_state: CategoryState,
    pub transaction_state: TransactionState,
}

impl AppState {
    /// 모든 도메인 State를 초기화하고 조합
    /// Build every domain state from the shared collaborators
    pub fn new(
        db: Database,
        token_service: TokenService,
        identity_provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            auth_state: AuthState::new(db.clone(), token_service, identity_provider),
            category_state: CategoryState::new(db.clone()),
            transaction_state: TransactionState::new(db),
        }
    }
}
