// Auth domain state
// 인증 도메인 상태
use std::sync::Arc;

use crate::shared::database::Database;
use crate::shared::clients::IdentityProvider;
use crate::domains::auth::services::{AuthService, TokenService};

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
    pub token_service: TokenService,
}

impl AuthState {
    /// AuthState 생성 (데이터베이스, 토큰 서비스, ID 제공자 필요)
    pub fn new(
        db: Database,
        token_service: TokenService,
        identity_provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            auth_service: AuthService::new(db, token_service.clone(), identity_provider),
            token_service,
        }
    }
}
