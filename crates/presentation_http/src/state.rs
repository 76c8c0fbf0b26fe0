//! Application state shared across handlers

use std::sync::Arc;

use application::ClassificationService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Classification pipeline
    pub classification_service: Arc<ClassificationService>,
    /// Application configuration, read-only after startup
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create state from a service and its configuration
    pub fn new(classification_service: ClassificationService, config: AppConfig) -> Self {
        Self {
            classification_service: Arc::new(classification_service),
            config: Arc::new(config),
        }
    }
}
