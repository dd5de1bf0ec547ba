//! EZMA library network catalog
//!
//! Browses the books and libraries of a remote library-network REST API
//! and serves them through a JSON API with server-side search, sort and
//! availability filtering.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, source: Arc<dyn services::source::CatalogSource>) -> Self {
        let services = services::Services::new(source, &config.ui);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
