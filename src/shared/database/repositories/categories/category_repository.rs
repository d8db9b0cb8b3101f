use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use crate::domains::categories::models::Category;
use crate::shared::database::repositories::{db_id, row_id};

// 카테고리 레포지토리
// CategoryRepository: handles all database operations for categories
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 사용자 카테고리 조회 (tipo 필터 선택)
    // Get categories for user, optionally filtered by kind
    pub async fn get_categories(&self, user_id: u64, kind: Option<&str>) -> Result<Vec<Category>> {
        let Some(user_id) = db_id(user_id) else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query(
            r#"
            SELECT id, nombre, tipo, usuario_id
            FROM categorias
            WHERE usuario_id = $1
              AND ($2::TEXT IS NULL OR tipo = $2)
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .bind(kind)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch categories by usuario_id")?;

        rows.iter().map(category_from_row).collect()
    }

    // 카테고리 생성
    // Create category
    pub async fn create_category(&self, name: &str, kind: &str, user_id: u64) -> Result<Category> {
        let user_id = db_id(user_id).context("User id out of range")?;

        let row = sqlx::query(
            r#"
            INSERT INTO categorias (nombre, tipo, usuario_id)
            VALUES ($1, $2, $3)
            RETURNING id, nombre, tipo, usuario_id
            "#,
        )
        .bind(name)
        .bind(kind)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create category")?;

        category_from_row(&row)
    }

    // 카테고리 소유 여부 확인
    // Check the category exists and belongs to the user
    pub async fn category_belongs_to_user(&self, category_id: u64, user_id: u64) -> Result<bool> {
        let (Some(category_id), Some(user_id)) = (db_id(category_id), db_id(user_id)) else {
            return Ok(false);
        };

        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categorias WHERE id = $1 AND usuario_id = $2)"
        )
        .bind(category_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check category ownership")
    }
}

fn category_from_row(row: &PgRow) -> Result<Category> {
    Ok(Category {
        id: row_id(row, "id")?,
        name: row.get("nombre"),
        kind: row.get("tipo"),
        user_id: row_id(row, "usuario_id")?,
    })
}
