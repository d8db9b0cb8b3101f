// Transactions domain state
// 거래 도메인 상태
use crate::shared::database::Database;
use crate::domains::transactions::services::TransactionService;

#[derive(Clone)]
pub struct TransactionState {
    pub transaction_service: TransactionService,
}

impl TransactionState {
    pub fn new(db: Database) -> Self {
        Self {
            transaction_service: TransactionService::new(db),
        }
    }
}
