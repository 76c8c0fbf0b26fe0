//! Chat-completions client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{
    InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, ResponseFormat,
    TokenUsage,
};

/// Inference engine for OpenAI-compatible APIs
pub struct OpenAiInferenceEngine {
    client: Client,
    config: InferenceConfig,
}

impl std::fmt::Debug for OpenAiInferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiInferenceEngine")
            .field("base_url", &self.config.base_url)
            .field("default_model", &self.config.default_model)
            .finish_non_exhaustive()
    }
}

impl OpenAiInferenceEngine {
    /// Create a new engine
    ///
    /// The HTTP client is built once and shared by every request.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized chat-completions engine"
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Get the model to use for a request
    fn resolve_model<'a>(&'a self, request: &'a InferenceRequest) -> &'a str {
        request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model)
    }
}

/// Chat-completions request body
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [InferenceMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

/// Chat-completions response body
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn status_error(status: StatusCode, body: String) -> InferenceError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => InferenceError::Unauthorized(body),
        StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
        s if s.is_server_error() => InferenceError::ServerError(format!("Status {s}: {body}")),
        s => InferenceError::RequestFailed(format!("Status {s}: {body}")),
    }
}

#[async_trait]
impl InferenceEngine for OpenAiInferenceEngine {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request)))]
    async fn generate(&self, request: InferenceRequest) -> Result<InferenceResponse, InferenceError> {
        let model = self.resolve_model(&request);
        let timeout_ms = request.timeout_ms.unwrap_or(self.config.timeout_ms);

        let body = ChatCompletionRequest {
            model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens.unwrap_or(self.config.max_tokens),
            response_format: request.response_format,
        };

        let mut builder = self
            .client
            .post(self.api_url("chat/completions"))
            .timeout(Duration::from_millis(timeout_ms))
            .json(&body);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        debug!(messages = request.messages.len(), "Sending chat completion");

        let response = builder
            .send()
            .await
            .map_err(|e| InferenceError::from_transport(&e, timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Chat completion failed");
            return Err(status_error(status, body));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                InferenceError::Timeout(timeout_ms)
            } else {
                InferenceError::InvalidResponse(e.to_string())
            }
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::InvalidResponse("no choices returned".to_string()))?;

        debug!(tokens = ?completion.usage, "Chat completion finished");

        Ok(InferenceResponse {
            content: choice.message.content.unwrap_or_default(),
            model: completion.model.unwrap_or_else(|| model.to_string()),
            usage: completion.usage,
            finish_reason: choice.finish_reason,
        })
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}
