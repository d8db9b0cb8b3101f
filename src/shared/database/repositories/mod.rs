// All repositories module
pub mod auth;
pub mod categories;
pub mod transactions;

// Re-export all repositories for convenience
pub use auth::*;
pub use categories::*;
pub use transactions::*;

use anyhow::{Context, Result};
use sqlx::postgres::PgRow;
use sqlx::Row;

/// API ID(u64) → BIGINT. `None` 이면 테이블에 존재할 수 없는 ID
/// Convert an API id to a BIGINT key; `None` means no row can have it
pub(crate) fn db_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

/// BIGINT 컬럼 → u64
pub(crate) fn row_id(row: &PgRow, column: &str) -> Result<u64> {
    let value: i64 = row.try_get(column).with_context(|| format!("Missing column {}", column))?;
    u64::try_from(value).with_context(|| format!("Negative {} in database: {}", column, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_beyond_bigint_have_no_key() {
        assert_eq!(db_id(0), Some(0));
        assert_eq!(db_id(i64::MAX as u64), Some(i64::MAX));
        assert_eq!(db_id(i64::MAX as u64 + 1), None);
        assert_eq!(db_id(u64::MAX), None);
    }
}
