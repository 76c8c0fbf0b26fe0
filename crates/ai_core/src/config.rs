//! Configuration for inference engine

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the inference engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the chat-completions API, including the version segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default model to use
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Bearer token for the provider; heuristic mode when absent
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Client-wide request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Timeout for classification calls in milliseconds
    #[serde(default = "default_classify_timeout_ms")]
    pub classify_timeout_ms: u64,

    /// Timeout for reply drafting calls in milliseconds
    #[serde(default = "default_draft_timeout_ms")]
    pub draft_timeout_ms: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature for classification
    #[serde(default = "default_classify_temperature")]
    pub classify_temperature: f32,

    /// Sampling temperature for reply drafting
    #[serde(default = "default_draft_temperature")]
    pub draft_temperature: f32,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000
}

const fn default_classify_timeout_ms() -> u64 {
    20000
}

const fn default_draft_timeout_ms() -> u64 {
    25000
}

const fn default_max_tokens() -> u32 {
    512
}

const fn default_classify_temperature() -> f32 {
    0.0
}

const fn default_draft_temperature() -> f32 {
    0.2
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
            classify_timeout_ms: default_classify_timeout_ms(),
            draft_timeout_ms: default_draft_timeout_ms(),
            max_tokens: default_max_tokens(),
            classify_temperature: default_classify_temperature(),
            draft_temperature: default_draft_temperature(),
        }
    }
}

impl InferenceConfig {
    /// Whether an API key is configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.default_model, "gpt-4o-mini");
        assert_eq!(config.classify_timeout_ms, 20000);
        assert_eq!(config.draft_timeout_ms, 25000);
        assert!(config.classify_temperature.abs() < 0.01);
        assert!((config.draft_temperature - 0.2).abs() < 0.01);
        assert!(!config.has_api_key());
    }

    #[test]
    fn config_deserialization() {
        let json = r#"{"base_url":"http://custom:8080/v1","default_model":"my-model","api_key":"sk-test"}"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "http://custom:8080/v1");
        assert_eq!(config.default_model, "my-model");
        assert!(config.has_api_key());
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let config: InferenceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.max_tokens, 512);
    }

    #[test]
    fn serialization_skips_api_key() {
        let config = InferenceConfig {
            api_key: Some(SecretString::from("sk-very-secret")),
            ..InferenceConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("default_model"));
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let json = r#"{"api_key":"sk-very-secret"}"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("InferenceConfig"));
        assert!(!debug.contains("sk-very-secret"));
    }
}
