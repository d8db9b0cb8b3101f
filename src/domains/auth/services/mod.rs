// Auth domain services
pub mod auth_service;
pub mod token_service;
pub mod state;

pub use auth_service::*;
pub use token_service::*;
pub use state::*;
