//! Provider-backed classification gateway
//!
//! Sends classification and drafting prompts to a chat-completions engine.
//! Every provider failure is logged and replaced by a conservative verdict
//! or the localized fallback reply.

use std::sync::Arc;

use ai_core::{
    InferenceConfig, InferenceEngine, InferenceError, InferenceRequest, OpenAiInferenceEngine,
};
use application::{ApplicationError, ClassificationGateway, EmailContent, GatewayVerdict};
use async_trait::async_trait;
use domain::{Category, LanguageCode, LocaleProfile};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::prompts;

/// Confidence assumed when the provider omits it
const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Call parameters for the two provider requests
#[derive(Debug, Clone, PartialEq)]
pub struct LlmGatewaySettings {
    /// Organization described in the prompts
    pub organization_profile: String,
    pub classify_timeout_ms: u64,
    pub draft_timeout_ms: u64,
    pub classify_temperature: f32,
    pub draft_temperature: f32,
    pub max_tokens: u32,
}

impl LlmGatewaySettings {
    /// Derive settings from the inference configuration
    pub fn from_config(config: &InferenceConfig, organization_profile: impl Into<String>) -> Self {
        Self {
            organization_profile: organization_profile.into(),
            classify_timeout_ms: config.classify_timeout_ms,
            draft_timeout_ms: config.draft_timeout_ms,
            classify_temperature: config.classify_temperature,
            draft_temperature: config.draft_temperature,
            max_tokens: config.max_tokens,
        }
    }
}

impl Default for LlmGatewaySettings {
    fn default() -> Self {
        Self::from_config(
            &InferenceConfig::default(),
            prompts::DEFAULT_ORGANIZATION_PROFILE,
        )
    }
}

/// Gateway backed by a chat-completions engine
pub struct LlmClassificationGateway {
    engine: Arc<dyn InferenceEngine>,
    settings: LlmGatewaySettings,
}

impl std::fmt::Debug for LlmClassificationGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClassificationGateway")
            .field("model", &self.engine.default_model())
            .field("settings", &self.settings)
            .finish()
    }
}

impl LlmClassificationGateway {
    /// Create a gateway over an existing engine
    pub fn new(engine: Arc<dyn InferenceEngine>, settings: LlmGatewaySettings) -> Self {
        Self { engine, settings }
    }

    /// Build an OpenAI-compatible engine from configuration
    pub fn from_config(
        config: InferenceConfig,
        organization_profile: impl Into<String>,
    ) -> Result<Self, ApplicationError> {
        let settings = LlmGatewaySettings::from_config(&config, organization_profile);
        let engine = OpenAiInferenceEngine::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(engine), settings))
    }

    async fn request_verdict(&self, email: &EmailContent) -> Result<GatewayVerdict, InferenceError> {
        let request = InferenceRequest::with_system(
            prompts::classification_system(&self.settings.organization_profile),
            prompts::classification_user(email),
        )
        .with_temperature(self.settings.classify_temperature)
        .with_max_tokens(self.settings.max_tokens)
        .with_timeout_ms(self.settings.classify_timeout_ms)
        .json_mode();

        let response = self.engine.generate(request).await?;
        parse_verdict(&response.content)
    }

    async fn request_reply(
        &self,
        email: &EmailContent,
        profile: &LocaleProfile,
    ) -> Result<String, InferenceError> {
        let request = InferenceRequest::with_system(
            prompts::draft_system(&self.settings.organization_profile, profile),
            prompts::draft_user(email, profile),
        )
        .with_temperature(self.settings.draft_temperature)
        .with_max_tokens(self.settings.max_tokens)
        .with_timeout_ms(self.settings.draft_timeout_ms)
        .json_mode();

        let response = self.engine.generate(request).await?;
        parse_reply(&response.content)
    }
}

#[async_trait]
impl ClassificationGateway for LlmClassificationGateway {
    #[instrument(skip(self, email), fields(body_len = email.body.len()))]
    async fn classify(&self, email: &EmailContent, language: LanguageCode) -> GatewayVerdict {
        match self.request_verdict(email).await {
            Ok(verdict) => {
                debug!(label = %verdict.label, confidence = verdict.confidence, "Provider verdict");
                verdict
            },
            Err(e) => {
                warn!(
                    kind = e.kind(),
                    error = %e,
                    "Classification failed, using conservative verdict"
                );
                GatewayVerdict::conservative()
            },
        }
    }

    #[instrument(skip(self, email), fields(body_len = email.body.len()))]
    async fn draft_reply(&self, email: &EmailContent, language: LanguageCode) -> String {
        let profile = LocaleProfile::for_language(language);
        match self.request_reply(email, profile).await {
            Ok(reply) if !reply.is_empty() => reply,
            Ok(_) => {
                warn!("Provider returned an empty reply, using fallback");
                profile.fallback_reply()
            },
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "Reply drafting failed, using fallback");
                profile.fallback_reply()
            },
        }
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}

/// Parse `{"category": ..., "confidence": ...}`
///
/// A missing category means productive and a missing confidence means 0.5.
/// Confidence may be a number or a numeric string.
fn parse_verdict(content: &str) -> Result<GatewayVerdict, InferenceError> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| InferenceError::InvalidResponse(format!("classification is not JSON: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| InferenceError::InvalidResponse("classification is not an object".into()))?;

    let label = object
        .get("category")
        .and_then(Value::as_str)
        .unwrap_or(Category::Productive.as_str());

    let confidence = match object.get("confidence") {
        None => DEFAULT_CONFIDENCE,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(DEFAULT_CONFIDENCE),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
            InferenceError::InvalidResponse(format!("confidence is not numeric: {s}"))
        })?,
        Some(other) => {
            return Err(InferenceError::InvalidResponse(format!(
                "confidence has unexpected type: {other}"
            )));
        },
    };

    Ok(GatewayVerdict::new(label, confidence))
}

/// Parse `{"suggested_reply": ...}`, dropping subject-line restatements
fn parse_reply(content: &str) -> Result<String, InferenceError> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| InferenceError::InvalidResponse(format!("reply is not JSON: {e}")))?;
    let reply = value
        .get("suggested_reply")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim();
    Ok(strip_subject_lines(reply))
}

/// Whether a line starts with `subject:` or `assunto:`, ignoring case and
/// surrounding whitespace
fn is_subject_line(line: &str) -> bool {
    let line = line.trim_start().to_lowercase();
    ["assunto", "subject"].iter().any(|prefix| {
        line.strip_prefix(prefix)
            .is_some_and(|rest| rest.trim_start().starts_with(':'))
    })
}

/// Remove subject-line restatements and trim the result
pub fn strip_subject_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !is_subject_line(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
