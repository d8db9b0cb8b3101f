// Shared module
pub mod middleware;
pub mod clients;
pub mod config;
pub mod database;
pub mod errors;
pub mod services;
