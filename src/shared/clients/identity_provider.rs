use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::errors::IdentityError;

/// 외부 ID 제공자
/// External identity provider: owns credentials, returns an opaque subject uid
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// 계정 생성, subject uid 반환
    async fn sign_up(&self, email: &str, password: &str) -> Result<String, IdentityError>;

    /// 자격 증명 확인, subject uid 반환
    async fn sign_in(&self, email: &str, password: &str) -> Result<String, IdentityError>;
}

// Firebase Identity Toolkit REST 클라이언트
// Firebase Identity Toolkit client
pub struct FirebaseClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
}

impl FirebaseClient {
    // 클라이언트 생성
    // Create new Firebase client instance
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, "https://identitytoolkit.googleapis.com/v1")
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    // accounts:{action} 호출 후 localId 반환
    async fn call_accounts(
        &self,
        action: &str,
        email: &str,
        password: &str,
    ) -> Result<String, IdentityError> {
        let url = format!("{}/accounts:{}?key={}", self.base_url, action, self.api_key);

        let response = self
            .http_client
            .post(&url)
            .json(&CredentialsBody {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| IdentityError::Unavailable(format!("Failed to reach identity provider: {}", e)))?;

        // HTTP 상태 코드 확인
        // Check HTTP status code
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let details = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            tracing::warn!(action, status, "identity provider rejected request");
            return Err(IdentityError::Rejected { status, details });
        }

        let account: AccountResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::Unavailable(format!("Failed to parse identity provider response: {}", e)))?;

        Ok(account.local_id)
    }
}

#[async_trait]
impl IdentityProvider for FirebaseClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<String, IdentityError> {
        self.call_accounts("signUp", email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<String, IdentityError> {
        self.call_accounts("signInWithPassword", email, password).await
    }
}
