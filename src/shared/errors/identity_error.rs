use thiserror::Error;

/// 외부 ID 제공자 에러
/// External identity provider errors
#[derive(Error, Debug)]
pub enum IdentityError {
    /// 제공자가 요청을 거절함 (잘못된 자격 증명, 중복 이메일 등)
    /// Provider rejected the request; `details` is its error payload
    #[error("Identity provider rejected the request (status {status})")]
    Rejected {
        status: u16,
        details: serde_json::Value,
    },

    /// 네트워크/파싱 실패
    /// Network or decoding failure
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}
