use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use crate::domains::auth::models::user::User;
use crate::shared::database::repositories::row_id;

// 사용자 레포지토리 (usuarios 테이블)
// UserRepository: handles all database operations for users
pub struct UserRepository {
    pool: PgPool
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 사용자 생성 (회원가입 시 ID 제공자 uid 와 함께)
    // Create user linked to the identity provider subject
    pub async fn create_user(
        &self,
        firebase_uid: &str,
        name: &str,
        email: &str,
    ) -> Result<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO usuarios (firebase_uid, nombre, correo_electronico)
            VALUES ($1, $2, $3)
            RETURNING id, firebase_uid, nombre, correo_electronico, rol, created_at
            "#,
        )
        .bind(firebase_uid)
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create user")?;

        Ok(User {
            id: row_id(&row, "id")?,
            firebase_uid: row.get("firebase_uid"),
            name: row.get("nombre"),
            email: row.get("correo_electronico"),
            role: row.get("rol"),
            created_at: row.get("created_at"),
        })
    }

    // firebase_uid 로 사용자 ID 조회 (로그인용)
    // Get user id by identity provider subject (for login)
    pub async fn get_user_id_by_firebase_uid(&self, firebase_uid: &str) -> Result<Option<u64>> {
        let id = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM usuarios WHERE firebase_uid = $1"
        )
        .bind(firebase_uid)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by firebase_uid")?;

        id.map(|id| u64::try_from(id).with_context(|| format!("Negative user id in database: {}", id)))
            .transpose()
    }
}
