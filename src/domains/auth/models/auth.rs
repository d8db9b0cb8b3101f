use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 회원가입 요청 모델
// Fields are optional so that missing values produce a 400 with a clear message.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[schema(as = RegisterRequest)]
pub struct RegisterRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "user@example.com")]
    pub email: Option<String>,

    /// Password (sent to the identity provider, never stored)
    /// 비밀번호 (ID 제공자에게 전달, 저장하지 않음)
    #[schema(example = "password123")]
    pub password: Option<String>,

    /// Display name
    /// 이름
    #[serde(rename = "nombre")]
    #[schema(example = "Ana")]
    pub name: Option<String>,
}

impl RegisterRequest {
    /// 필수 필드 확인
    /// Returns `(email, password, name)` when all are present and non-empty
    pub fn required_fields(&self) -> Option<(&str, &str, &str)> {
        Some((
            non_empty(&self.email)?,
            non_empty(&self.password)?,
            non_empty(&self.name)?,
        ))
    }
}

// 회원가입 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = RegisterResponse)]
pub struct RegisterResponse {
    /// Success message
    /// 성공 메시지
    pub message: String,

    /// Identity provider subject id
    #[schema(example = "f1r3b4s3u1d")]
    pub uid: String,
}

// 로그인 요청 모델
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginRequest)]
pub struct LoginRequest {
    #[schema(example = "user@example.com")]
    pub email: Option<String>,

    #[schema(example = "password123")]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        Some((non_empty(&self.email)?, non_empty(&self.password)?))
    }
}

// 로그인 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = LoginResponse)]
pub struct LoginResponse {
    /// Bearer token (1시간 만료)
    /// Bearer token, valid for one hour
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
