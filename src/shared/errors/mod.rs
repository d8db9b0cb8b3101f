// Shared errors
pub mod auth_error;
pub mod category_error;
pub mod identity_error;
pub mod token_error;
pub mod transaction_error;

pub use auth_error::*;
pub use category_error::*;
pub use identity_error::*;
pub use token_error::*;
pub use transaction_error::*;
