// Shared middleware
pub mod auth;
pub mod request;

pub use auth::*;
pub use request::*;
