// Domain modules
pub mod auth;
pub mod categories;
pub mod transactions;
