use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    Json,
};
use crate::shared::services::AppState;
use crate::shared::errors::AuthError;
use crate::shared::database::repositories::db_id;

/// 인증된 사용자 정보 (Bearer 토큰에서 추출)
/// Authenticated user information (extracted from the bearer token)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: u64,
}

/// AuthenticatedUser를 Axum Extractor로 구현
///
/// 사용법:
/// ```rust,ignore
/// pub async fn get_categories(
///     State(app_state): State<AppState>,
///     authenticated_user: AuthenticatedUser,  // <- 이렇게 사용!
/// ) -> Result<...> {
///     let user_id = authenticated_user.user_id;
///     // ...
/// }
/// ```
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 "Bearer <token>" 추출
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AuthError::MissingToken)?;

        // 2. 토큰 검증 (실패 사유는 구분하지 않음)
        let subject_id = state
            .auth_state
            .token_service
            .verify(token)
            .ok_or(AuthError::InvalidToken)?;

        // 3. subject 는 숫자 사용자 ID (BIGINT 범위)
        let user_id = subject_id
            .parse::<u64>()
            .ok()
            .filter(|id| db_id(*id).is_some())
            .ok_or(AuthError::InvalidToken)?;

        Ok(AuthenticatedUser { user_id })
    }
}

/// `Bearer <token>` 형식 파싱
fn bearer_token(header: &str) -> Option<&str> {
    let rest = header.strip_prefix("Bearer ")?;
    Some(rest.split(' ').next().unwrap_or_default())
}
