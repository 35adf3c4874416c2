//! Bookshelf
//!
//! A REST JSON API for a book catalog backed by PostgreSQL, with database
//! settings discovered from the environment variables common hosting
//! platforms provide.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod datasource;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
