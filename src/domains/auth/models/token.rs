use serde::{Deserialize, Serialize};

/// 토큰 유효 기간 (초)
/// Token lifetime in seconds (1 hour)
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// 토큰 헤더 (모든 토큰에서 동일)
/// Token header, identical for every issued credential
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
}

impl Default for TokenHeader {
    fn default() -> Self {
        Self {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// 토큰 Claims (payload)
/// Token claims. Serialized as `{"userId": .., "exp": ..}` in this order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// 사용자 ID (문자열, 토큰 메커니즘은 해석하지 않음)
    /// Subject identifier, opaque to the token mechanism
    #[serde(rename = "userId")]
    pub subject_id: String,

    /// 만료 시간 (Unix timestamp, 초)
    /// Expiration time (Unix timestamp, seconds)
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl TokenClaims {
    /// 새 Claims 생성 (만료 시간 자동 계산)
    /// Create new claims expiring `TOKEN_TTL_SECONDS` after `now`
    pub fn new(subject_id: impl Into<String>, now: i64) -> Self {
        Self {
            subject_id: subject_id.into(),
            expires_at: now + TOKEN_TTL_SECONDS,
        }
    }

    /// `exp < now` 이면 만료 (같은 초는 아직 유효)
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_serialize_with_wire_names_in_order() {
        let claims = TokenClaims::new("42", 1_700_000_000);
        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"userId":"42","exp":1700003600}"#);
    }

    #[test]
    fn header_serializes_alg_before_typ() {
        let json = serde_json::to_string(&TokenHeader::default()).unwrap();
        assert_eq!(json, r#"{"alg":"HS256","typ":"JWT"}"#);
    }

    #[test]
    fn claims_missing_fields_fail_to_decode() {
        assert!(serde_json::from_str::<TokenClaims>(r#"{"userId":"42"}"#).is_err());
        assert!(serde_json::from_str::<TokenClaims>(r#"{"exp":10}"#).is_err());
        assert!(serde_json::from_str::<TokenClaims>(r#"{"userId":42,"exp":10}"#).is_err());
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let claims = TokenClaims { subject_id: "1".into(), expires_at: 100 };
        assert!(!claims.is_expired_at(99));
        assert!(!claims.is_expired_at(100));
        assert!(claims.is_expired_at(101));
    }
}
