use chrono::{DateTime, Utc};

/// 사용자 (usuarios 테이블)
/// User row. Credentials live in the identity provider, not here.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub firebase_uid: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
