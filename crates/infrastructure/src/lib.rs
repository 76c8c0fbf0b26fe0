//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the provider-backed
//! and heuristic classification gateways, the document text extractor, and
//! configuration loading.

pub mod adapters;
pub mod config;
pub mod prompts;

use std::sync::Arc;

use application::{ApplicationError, ClassificationGateway};
use tracing::info;

pub use adapters::*;
pub use config::{AppConfig, ClassifierConfig, Environment, ServerConfig};

/// Pick the gateway for this configuration
///
/// A configured API key selects the provider; otherwise the offline
/// heuristic is used.
pub fn build_gateway(
    config: &AppConfig,
) -> Result<Arc<dyn ClassificationGateway>, ApplicationError> {
    if config.uses_provider() {
        info!(model = %config.inference.default_model, "Using provider-backed classification");
        let gateway = LlmClassificationGateway::from_config(
            config.inference.clone(),
            config.classifier.organization_profile.clone(),
        )?;
        Ok(Arc::new(gateway))
    } else {
        info!("No provider API key configured, using heuristic classification");
        Ok(Arc::new(HeuristicClassificationGateway::new()))
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn heuristic_without_api_key() {
        let gateway = build_gateway(&AppConfig::default()).unwrap();
        assert_eq!(gateway.name(), "heuristic");
    }

    #[test]
    fn provider_with_api_key() {
        let mut config = AppConfig::default();
        config.inference.api_key = Some(SecretString::from("sk-test"));
        let gateway = build_gateway(&config).unwrap();
        assert_eq!(gateway.name(), "llm");
    }
}
