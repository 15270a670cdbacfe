// Library modules for integration tests
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod rate_limit;
pub mod server;
pub mod services;
pub mod speech;
pub mod transcribe;
