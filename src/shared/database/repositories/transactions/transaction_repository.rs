use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use crate::domains::transactions::models::{
    NewTransaction, Transaction, TransactionChanges, TransactionKind,
};
use crate::shared::database::repositories::{db_id, row_id};

// 거래 레포지토리
// TransactionRepository: handles all database operations for transactions
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 거래 생성 (fecha 없으면 CURRENT_DATE)
    // Create transaction, date defaults to today
    pub async fn create_transaction(&self, user_id: u64, data: &NewTransaction) -> Result<Transaction> {
        let user_id = db_id(user_id).context("User id out of range")?;
        let category_id = db_id(data.category_id).context("Category id out of range")?;

        let row = sqlx::query(
            r#"
            INSERT INTO transacciones (descripcion, monto, fecha, tipo, categoria_id, usuario_id)
            VALUES ($1, $2, COALESCE($3, CURRENT_DATE), $4, $5, $6)
            RETURNING id, descripcion, monto, fecha, tipo, categoria_id, usuario_id
            "#,
        )
        .bind(&data.description)
        .bind(data.amount)
        .bind(data.date)
        .bind(data.kind.as_str())
        .bind(category_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create transaction")?;

        transaction_from_row(&row, None)
    }

    // 사용자 거래 목록 조회 (카테고리 이름 포함)
    // Get transactions by user with the category name
    pub async fn get_transactions_by_user_id(&self, user_id: u64) -> Result<Vec<Transaction>> {
        let Some(user_id) = db_id(user_id) else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query(
            r#"
            SELECT
                t.id, t.descripcion, t.monto, t.fecha, t.tipo, t.categoria_id,
                c.nombre AS categoria,
                t.usuario_id
            FROM transacciones t
            JOIN categorias c ON t.categoria_id = c.id
            WHERE t.usuario_id = $1
            ORDER BY t.fecha DESC, t.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch transactions by usuario_id")?;

        rows.iter()
            .map(|row| transaction_from_row(row, Some(row.get("categoria"))))
            .collect()
    }

    // 거래 단건 조회 (ID + 사용자)
    // Get transaction by id, scoped to the user
    pub async fn get_transaction_by_id(&self, id: u64, user_id: u64) -> Result<Option<Transaction>> {
        let (Some(id), Some(user_id)) = (db_id(id), db_id(user_id)) else {
            return Ok(None);
        };

        let row = sqlx::query(
            r#"
            SELECT
                t.id, t.descripcion, t.monto, t.fecha, t.tipo, t.categoria_id,
                c.nombre AS categoria,
                t.usuario_id
            FROM transacciones t
            JOIN categorias c ON t.categoria_id = c.id
            WHERE t.id = $1 AND t.usuario_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch transaction by id")?;

        row.map(|row| transaction_from_row(&row, Some(row.get("categoria"))))
            .transpose()
    }

    // 거래 수정 (전달된 필드만)
    // Update only the provided fields. Returns the number of rows touched.
    pub async fn update_transaction(
        &self,
        id: u64,
        user_id: u64,
        changes: &TransactionChanges,
    ) -> Result<u64> {
        let (Some(id), Some(user_id)) = (db_id(id), db_id(user_id)) else {
            return Ok(0);
        };

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE transacciones SET ");
        let mut fields = builder.separated(", ");

        if let Some(description) = &changes.description {
            fields.push("descripcion = ").push_bind_unseparated(description.clone());
        }
        if let Some(amount) = changes.amount {
            fields.push("monto = ").push_bind_unseparated(amount);
        }
        if let Some(date) = changes.date {
            fields.push("fecha = ").push_bind_unseparated(date);
        }
        if let Some(kind) = changes.kind {
            fields.push("tipo = ").push_bind_unseparated(kind.as_str());
        }
        if let Some(category_id) = changes.category_id {
            let category_id = db_id(category_id).context("Category id out of range")?;
            fields.push("categoria_id = ").push_bind_unseparated(category_id);
        }

        builder
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" AND usuario_id = ")
            .push_bind(user_id);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .context("Failed to update transaction")?;

        Ok(result.rows_affected())
    }

    // 거래 삭제
    // Delete transaction. Returns the number of rows removed.
    pub async fn delete_transaction(&self, id: u64, user_id: u64) -> Result<u64> {
        let (Some(id), Some(user_id)) = (db_id(id), db_id(user_id)) else {
            return Ok(0);
        };

        let result = sqlx::query(
            r#"
            DELETE FROM transacciones
            WHERE id = $1 AND usuario_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .context("Failed to delete transaction")?;

        Ok(result.rows_affected())
    }
}

fn transaction_from_row(row: &PgRow, category: Option<String>) -> Result<Transaction> {
    let kind: String = row.get("tipo");
    let kind = TransactionKind::parse(&kind)
        .with_context(|| format!("Unknown transaction tipo in database: {}", kind))?;

    Ok(Transaction {
        id: row_id(row, "id")?,
        description: row.get("descripcion"),
        amount: row.get("monto"),
        date: row.get("fecha"),
        kind,
        category_id: row_id(row, "categoria_id")?,
        category,
        user_id: row_id(row, "usuario_id")?,
    })
}
