//! Targeting Engine - Campaign Delivery Service
//!
//! This library answers which advertising campaigns should be shown for a
//! request context of application, country and operating system.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Campaign selection over injected stores
//! - **Targeting**: Context extraction and rule evaluation
//! - **Repositories**: Database access
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod targeting;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult, StorageError};
pub use state::AppState;
