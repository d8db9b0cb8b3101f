// src/domains/auth/services/token_service.rs
use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::domains::auth::models::token::{TokenClaims, TokenHeader};
use crate::shared::errors::TokenError;

type HmacSha256 = Hmac<Sha256>;

/// 현재 시간 제공자 (초 단위 Unix timestamp)
/// Source of the current time in seconds since epoch
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// 시스템 시계
/// Wall clock backed by `chrono::Utc`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// 토큰 서비스
/// Token service: binds a signing secret and a clock to `issue_token` / `verify_token`
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<[u8]>,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// 토큰 서비스 생성 (시스템 시계 사용)
    /// Create token service using the system clock
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self::with_clock(secret, Arc::new(SystemClock))
    }

    /// 시계를 주입하여 생성 (테스트용)
    /// Create token service with an injected clock
    pub fn with_clock(secret: impl AsRef<[u8]>, clock: Arc<dyn Clock>) -> Self {
        Self {
            secret: Arc::from(secret.as_ref()),
            clock,
        }
    }

    /// Access Token 발급 (1시간 만료)
    /// Issue a credential for `subject_id`, valid for one hour
    pub fn issue(&self, subject_id: &str) -> Result<String, TokenError> {
        issue_token(subject_id, &self.secret, self.clock.now())
    }

    /// Access Token 검증, 성공 시 subject ID 반환
    /// Verify a credential and recover its subject id
    pub fn verify(&self, token: &str) -> Option<String> {
        verify_token(token, &self.secret, self.clock.now())
    }
}

/// 토큰 발급
/// Issue `base64url(header).base64url(payload).base64url(hmac)`
pub fn issue_token(subject_id: &str, secret: &[u8], now: i64) -> Result<String, TokenError> {
    let header = encode_segment(&TokenHeader::default())?;
    let payload = encode_segment(&TokenClaims::new(subject_id, now))?;

    let mut mac = new_mac(secret)?;
    mac.update(header.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{header}.{payload}.{signature}"))
}

/// 토큰 검증
/// Verify a credential. Every failure collapses to `None`; the reason is only logged.
pub fn verify_token(token: &str, secret: &[u8], now: i64) -> Option<String> {
    match decode_token(token, secret, now) {
        Ok(claims) => Some(claims.subject_id),
        Err(e) => {
            tracing::debug!(reason = %e, "token verification failed");
            None
        }
    }
}

/// 토큰 디코딩 (상세 에러 포함)
/// Verify a credential keeping the detailed failure reason
pub fn decode_token(token: &str, secret: &[u8], now: i64) -> Result<TokenClaims, TokenError> {
    // 1. header.payload.signature 분리
    let segments: Vec<&str> = token.split('.').collect();
    let &[header, payload, signature] = segments.as_slice() else {
        return Err(TokenError::Malformed(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    };
    if header.is_empty() || payload.is_empty() || signature.is_empty() {
        return Err(TokenError::Malformed("empty segment".to_string()));
    }

    // 2. 서명 재계산 및 비교 (constant-time)
    let signature = URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(|e| TokenError::Malformed(format!("signature is not base64url: {}", e)))?;
    let mut mac = new_mac(secret)?;
    mac.update(header.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| TokenError::SignatureMismatch)?;

    // 3. payload 디코딩
    let raw = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| TokenError::Malformed(format!("payload is not base64url: {}", e)))?;
    let claims: TokenClaims = serde_json::from_slice(&raw)
        .map_err(|e| TokenError::Malformed(format!("payload is not valid claims: {}", e)))?;
    if claims.subject_id.is_empty() {
        return Err(TokenError::Malformed("empty subject".to_string()));
    }

    // 4. 만료 확인 (exp == now 는 유효)
    if claims.is_expired_at(now) {
        return Err(TokenError::Expired {
            expires_at: claims.expires_at,
            now,
        });
    }

    Ok(claims)
}

fn new_mac(secret: &[u8]) -> Result<HmacSha256, TokenError> {
    HmacSha256::new_from_slice(secret)
        .map_err(|e| TokenError::Infrastructure(format!("HMAC key rejected: {}", e)))
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String, TokenError> {
    let json = serde_json::to_vec(value)
        .map_err(|e| TokenError::Infrastructure(format!("Failed to encode token segment: {}", e)))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}
