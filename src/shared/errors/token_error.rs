use thiserror::Error;

/// 토큰 발급/검증 에러
/// Token issuance/verification errors.
///
/// The verifier never returns these to callers; they are logged and then
/// collapsed into a single failure.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// 형식 오류 (세그먼트 수, base64, JSON)
    /// Wrong segment count or undecodable base64/JSON
    #[error("Malformed token: {0}")]
    Malformed(String),

    /// 서명 불일치
    /// Signature mismatch
    #[error("Token signature mismatch")]
    SignatureMismatch,

    /// 만료된 토큰
    /// Expired token
    #[error("Token expired at {expires_at} (now {now})")]
    Expired { expires_at: i64, now: i64 },

    /// HMAC/JSON 사용 불가
    /// Cryptographic or encoding primitive unavailable
    #[error("Token infrastructure error: {0}")]
    Infrastructure(String),
}
