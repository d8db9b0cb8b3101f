// Auth domain models
pub mod auth;
pub mod user;
pub mod token;

pub use auth::*;
pub use user::*;
pub use token::*;
