use crate::shared::database::{CategoryRepository, Database, TransactionRepository};
use crate::domains::transactions::models::{
    CreateTransactionRequest, DeleteTransactionRequest, Transaction, UpdateTransactionRequest,
};
use crate::shared::errors::TransactionError;

/// 거래 서비스
/// TransactionService: handles transaction business logic.
/// Every operation is scoped to the authenticated user.
#[derive(Clone)]
pub struct TransactionService {
    db: Database,
}

impl TransactionService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 거래 생성
    /// Create transaction after validating the request and category ownership
    pub async fn create_transaction(
        &self,
        user_id: u64,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, TransactionError> {
        let new_transaction = request.validate()?;
        self.ensure_category_owned(new_transaction.category_id, user_id).await?;

        let repo = TransactionRepository::new(self.db.pool().clone());
        let transaction = repo
            .create_transaction(user_id, &new_transaction)
            .await
            .map_err(|e| TransactionError::DatabaseError(format!("Failed to create transaction: {:#}", e)))?;

        tracing::debug!(user_id, transaction_id = transaction.id, "transaction created");
        Ok(transaction)
    }

    /// 사용자 거래 목록
    pub async fn get_transactions(&self, user_id: u64) -> Result<Vec<Transaction>, TransactionError> {
        let repo = TransactionRepository::new(self.db.pool().clone());
        repo.get_transactions_by_user_id(user_id)
            .await
            .map_err(|e| TransactionError::DatabaseError(format!("Failed to fetch transactions: {:#}", e)))
    }

    /// 거래 단건 조회
    pub async fn get_transaction(&self, user_id: u64, id: u64) -> Result<Transaction, TransactionError> {
        let repo = TransactionRepository::new(self.db.pool().clone());
        repo.get_transaction_by_id(id, user_id)
            .await
            .map_err(|e| TransactionError::DatabaseError(format!("Failed to fetch transaction: {:#}", e)))?
            .ok_or(TransactionError::NotFound { id })
    }

    /// 거래 수정 (부분 수정)
    /// Partial update
    pub async fn update_transaction(
        &self,
        user_id: u64,
        request: UpdateTransactionRequest,
    ) -> Result<(), TransactionError> {
        let (id, changes) = request.validate()?;
        if let Some(category_id) = changes.category_id {
            self.ensure_category_owned(category_id, user_id).await?;
        }

        let repo = TransactionRepository::new(self.db.pool().clone());
        let updated = repo
            .update_transaction(id, user_id, &changes)
            .await
            .map_err(|e| TransactionError::DatabaseError(format!("Failed to update transaction: {:#}", e)))?;

        if updated == 0 {
            return Err(TransactionError::NotFound { id });
        }
        Ok(())
    }

    /// 거래 삭제
    pub async fn delete_transaction(
        &self,
        user_id: u64,
        request: DeleteTransactionRequest,
    ) -> Result<(), TransactionError> {
        let id = request.id.ok_or(TransactionError::MissingFields("id"))?;

        let repo = TransactionRepository::new(self.db.pool().clone());
        let deleted = repo
            .delete_transaction(id, user_id)
            .await
            .map_err(|e| TransactionError::DatabaseError(format!("Failed to delete transaction: {:#}", e)))?;

        if deleted == 0 {
            return Err(TransactionError::NotFound { id });
        }
        Ok(())
    }

    async fn ensure_category_owned(&self, category_id: u64, user_id: u64) -> Result<(), TransactionError> {
        let repo = CategoryRepository::new(self.db.pool().clone());
        let owned = repo
            .category_belongs_to_user(category_id, user_id)
            .await
            .map_err(|e| TransactionError::DatabaseError(format!("Failed to check category: {:#}", e)))?;

        if owned {
            Ok(())
        } else {
            Err(TransactionError::UnknownCategory { id: category_id })
        }
    }
}
