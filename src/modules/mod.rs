// Declare all modules
pub mod app;
pub mod auth;
pub mod bank;
pub mod config;
pub mod encryption;
pub mod portfolio;
pub mod utils;

// No re-exports here as they're handled in lib.rs
