//! Business logic services

pub mod catalog;
pub mod preferences;
pub mod source;

use std::sync::Arc;

use crate::{config::UiConfig, services::source::CatalogSource};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub preferences: preferences::PreferenceService,
}

impl Services {
    /// Create all services on top of the given remote catalog
    pub fn new(source: Arc<dyn CatalogSource>, ui_config: &UiConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(source),
            preferences: preferences::PreferenceService::new(ui_config.default_theme),
        }
    }
}
