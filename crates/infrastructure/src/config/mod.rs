//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `classifier`: pipeline switches and extraction caps
//!
//! Provider settings reuse [`InferenceConfig`] from `ai_core`.

mod classifier;
mod server;

use std::fmt;

use ai_core::InferenceConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use classifier::ClassifierConfig;
pub use server::{ServerConfig, parse_origins};

/// Prefix of layered environment variables
pub const ENV_PREFIX: &str = "MAILTRIAGE";

/// Application environment (development or production)
///
/// Production hides internal error details from HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Provider configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Classification pipeline configuration
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file and the
    /// environment
    ///
    /// Layered variables use the `MAILTRIAGE_` prefix with `__` between
    /// sections (e.g. `MAILTRIAGE_SERVER__PORT=9000`). The flat variable
    /// names used by earlier deployments (`OPENAI_API_KEY`, `ALLOW_DEBUG`, ...)
    /// are applied last.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = Self::builder_with_defaults()?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_legacy_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse configuration from a TOML document layered over the defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        Self::builder_with_defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn builder_with_defaults()
    -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("inference.base_url", "https://api.openai.com/v1")?
            .set_default("inference.default_model", "gpt-4o-mini")
    }

    /// Apply the flat variable names used by earlier deployments
    ///
    /// `lookup` returns the value of a variable, if set. Blank values are
    /// ignored, except for `ALLOWED_ORIGINS` where blank means any origin.
    pub fn apply_legacy_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_blank("OPENAI_API_KEY") {
            self.inference.api_key = Some(SecretString::from(key.trim().to_owned()));
            debug!("Loaded provider API key from OPENAI_API_KEY");
        }
        if let Some(model) = non_blank("OPENAI_MODEL") {
            self.inference.default_model = model.trim().to_owned();
        }
        if let Some(url) = non_blank("OPENAI_BASE_URL") {
            self.inference.base_url = url.trim().trim_end_matches('/').to_owned();
        }
        if let Some(flag) = lookup("ALLOW_DEBUG") {
            self.classifier.debug_diagnostics = flag.trim().eq_ignore_ascii_case("true");
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            self.server.allowed_origins = parse_origins(&origins);
        }
        if let Some(pages) = non_blank("PDF_MAX_PAGES") {
            match pages.trim().parse() {
                Ok(value) => self.classifier.pdf_max_pages = value,
                Err(_) => warn!(value = %pages, "Ignoring invalid PDF_MAX_PAGES"),
            }
        }
        if let Some(chars) = non_blank("TEXT_MAX_CHARS") {
            match chars.trim().parse() {
                Ok(value) => self.classifier.text_max_chars = value,
                Err(_) => warn!(value = %chars, "Ignoring invalid TEXT_MAX_CHARS"),
            }
        }
    }

    /// Whether internal error details may be shown to clients
    #[must_use]
    pub fn expose_internal_errors(&self) -> bool {
        self.environment != Environment::Production
    }

    /// Whether a network provider will be used instead of the heuristic
    #[must_use]
    pub const fn uses_provider(&self) -> bool {
        self.inference.has_api_key()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn environment_parsing() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(
            "DEVELOPMENT".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.inference.default_model, "gpt-4o-mini");
        assert_eq!(config.classifier.pdf_max_pages, 30);
        assert!(!config.uses_provider());
        assert!(config.expose_internal_errors());
    }

    #[test]
    fn toml_overrides_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            environment = "production"

            [server]
            port = 9000
            allowed_origins = ["https://mail.example.com"]

            [inference]
            api_key = "sk-from-file"
            classify_timeout_ms = 1000

            [classifier]
            debug_diagnostics = true
            text_max_chars = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert!(!config.expose_internal_errors());
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.allowed_origins, vec!["https://mail.example.com"]);
        assert!(config.uses_provider());
        assert_eq!(config.inference.classify_timeout_ms, 1000);
        assert_eq!(config.inference.draft_timeout_ms, 25000);
        assert!(config.classifier.debug_diagnostics);
        assert_eq!(config.classifier.text_max_chars, 500);
    }

    #[test]
    fn legacy_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_legacy_env(lookup_from(&[
            ("OPENAI_API_KEY", "sk-legacy"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
            ("ALLOW_DEBUG", "TRUE"),
            ("ALLOWED_ORIGINS", "https://a.example.com/, https://b.example.com"),
            ("PDF_MAX_PAGES", "5"),
            ("TEXT_MAX_CHARS", "2000"),
        ]));

        assert_eq!(
            config
                .inference
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string()),
            Some("sk-legacy".to_string())
        );
        assert_eq!(config.inference.default_model, "gpt-4o");
        assert_eq!(config.inference.base_url, "http://localhost:8080/v1");
        assert!(config.classifier.debug_diagnostics);
        assert_eq!(
            config.server.allowed_origins,
            vec!["https://a.example.com", "https://b.example.com"]
        );
        assert_eq!(config.classifier.pdf_max_pages, 5);
        assert_eq!(config.classifier.text_max_chars, 2000);
    }

    #[test]
    fn legacy_env_ignores_blank_and_invalid_values() {
        let mut config = AppConfig::default();
        config.apply_legacy_env(lookup_from(&[
            ("OPENAI_API_KEY", "   "),
            ("ALLOW_DEBUG", "yes"),
            ("PDF_MAX_PAGES", "many"),
        ]));

        assert!(!config.uses_provider());
        assert!(!config.classifier.debug_diagnostics);
        assert_eq!(config.classifier.pdf_max_pages, 30);
    }

    #[test]
    fn blank_allowed_origins_means_any() {
        let mut config = AppConfig::default();
        config.server.allowed_origins = vec!["https://old.example.com".to_string()];
        config.apply_legacy_env(lookup_from(&[("ALLOWED_ORIGINS", "")]));
        assert!(config.server.allowed_origins.is_empty());
    }

    #[test]
    fn debug_output_hides_api_key() {
        let mut config = AppConfig::default();
        config.apply_legacy_env(lookup_from(&[("OPENAI_API_KEY", "sk-hidden")]));
        assert!(!format!("{config:?}").contains("sk-hidden"));
    }
}
