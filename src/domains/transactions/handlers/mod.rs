// Transactions domain handlers
pub mod transaction_handler;

pub use transaction_handler::*;
