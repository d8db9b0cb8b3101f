// Categories domain services
pub mod category_service;
pub mod state;

pub use category_service::*;
pub use state::*;
