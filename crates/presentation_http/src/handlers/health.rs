//! Health check handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health body of the former `/api` entry point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyHealthResponse {
    pub ok: bool,
}

/// Liveness check under `/api`
pub async fn legacy_health_check() -> Json<LegacyHealthResponse> {
    Json(LegacyHealthResponse { ok: true })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    /// Active gateway, `llm` or `heuristic`
    pub gateway: String,
    /// Whether a provider key is configured
    pub provider_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Readiness check
///
/// Always ready: without a provider the heuristic gateway answers.
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let provider_configured = state.config.uses_provider();
    Json(ReadinessResponse {
        ready: true,
        gateway: state.classification_service.gateway_name().to_string(),
        provider_configured,
        model: provider_configured.then(|| state.config.inference.default_model.clone()),
    })
}
