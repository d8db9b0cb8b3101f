use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::shared::errors::IdentityError;

/// 인증 관련 에러
/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// 필수 필드 누락
    /// Required request fields missing
    #[error("Required fields: {0}")]
    MissingFields(&'static str),

    /// ID 제공자가 회원가입을 거절함
    /// Identity provider rejected the sign-up
    #[error("Registration rejected by identity provider")]
    RegistrationRejected { details: serde_json::Value },

    /// 잘못된 이메일 또는 비밀번호
    /// Identity provider rejected the credentials
    #[error("Invalid email or password")]
    InvalidCredentials { details: serde_json::Value },

    /// ID 제공자 호출 실패
    /// Identity provider unreachable or returned garbage
    #[error("Identity provider error: {0}")]
    IdentityProvider(String),

    /// 사용자를 찾을 수 없음 (firebase_uid)
    /// No user row for the identity provider subject
    #[error("User not found in database")]
    UserNotFound { firebase_uid: String },

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),

    /// 잘못된 또는 만료된 토큰
    /// Invalid or expired token
    #[error("Invalid or expired token")]
    InvalidToken,

    /// 토큰이 제공되지 않음
    /// Token not provided
    #[error("Authorization token required")]
    MissingToken,
}

impl AuthError {
    /// 회원가입 단계의 ID 제공자 에러 변환
    pub fn from_sign_up(err: IdentityError) -> Self {
        match err {
            IdentityError::Rejected { details, .. } => AuthError::RegistrationRejected { details },
            IdentityError::Unavailable(msg) => AuthError::IdentityProvider(msg),
        }
    }

    /// 로그인 단계의 ID 제공자 에러 변환
    pub fn from_sign_in(err: IdentityError) -> Self {
        match err {
            IdentityError::Rejected { details, .. } => AuthError::InvalidCredentials { details },
            IdentityError::Unavailable(msg) => AuthError::IdentityProvider(msg),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingFields(_) | AuthError::RegistrationRejected { .. } => {
                StatusCode::BAD_REQUEST
            }
            AuthError::InvalidCredentials { .. }
            | AuthError::InvalidToken
            | AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            AuthError::IdentityProvider(_)
            | AuthError::DatabaseError(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// AuthError를 HTTP 응답으로 변환
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        let status = err.status_code();

        let body = match &err {
            AuthError::RegistrationRejected { details }
            | AuthError::InvalidCredentials { details } => {
                json!({ "error": err.to_string(), "details": details })
            }
            AuthError::IdentityProvider(_) | AuthError::DatabaseError(_) | AuthError::Internal(_) => {
                // 내부 에러 상세는 로그에만 남김
                tracing::error!(error = %err, "auth request failed");
                json!({ "error": "Authentication request failed" })
            }
            _ => json!({ "error": err.to_string() }),
        };

        (status, Json(body))
    }
}
