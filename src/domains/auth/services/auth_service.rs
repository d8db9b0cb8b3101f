use std::sync::Arc;

use crate::shared::database::{Database, UserRepository};
use crate::shared::clients::IdentityProvider;
use crate::domains::auth::models::{LoginRequest, RegisterRequest};
use crate::domains::auth::services::TokenService;
use crate::shared::errors::AuthError;

// 인증 서비스
// AuthService: registration and login against the identity provider,
// token issuance on success
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    token_service: TokenService,
    identity_provider: Arc<dyn IdentityProvider>,
}

impl AuthService {
    pub fn new(
        db: Database,
        token_service: TokenService,
        identity_provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            db,
            token_service,
            identity_provider,
        }
    }

    // 회원가입 (비즈니스 로직)
    // Returns the identity provider uid of the new account
    pub async fn register(&self, request: RegisterRequest) -> Result<String, AuthError> {
        let (email, password, name) = request
            .required_fields()
            .ok_or(AuthError::MissingFields("email, password, nombre"))?;

        // 1. ID 제공자에 계정 생성
        let firebase_uid = self
            .identity_provider
            .sign_up(email, password)
            .await
            .map_err(AuthError::from_sign_up)?;

        // 2. 사용자 레코드 생성
        let user_repo = UserRepository::new(self.db.pool().clone());
        let user = user_repo
            .create_user(&firebase_uid, name, email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to create user: {:#}", e)))?;

        tracing::info!(user_id = user.id, "user registered");
        Ok(firebase_uid)
    }

    // 로그인 (비즈니스 로직)
    // Returns a bearer token for the user's numeric id
    pub async fn login(&self, request: LoginRequest) -> Result<String, AuthError> {
        let (email, password) = request
            .required_fields()
            .ok_or(AuthError::MissingFields("email, password"))?;

        // 1. ID 제공자에서 자격 증명 확인
        let firebase_uid = self
            .identity_provider
            .sign_in(email, password)
            .await
            .map_err(AuthError::from_sign_in)?;

        // 2. 사용자 ID 조회
        let user_repo = UserRepository::new(self.db.pool().clone());
        let user_id = user_repo
            .get_user_id_by_firebase_uid(&firebase_uid)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {:#}", e)))?
            .ok_or(AuthError::UserNotFound { firebase_uid })?;

        // 3. 토큰 발급
        self.token_service
            .issue(&user_id.to_string())
            .map_err(|e| AuthError::Internal(format!("Failed to issue token: {}", e)))
    }
}
