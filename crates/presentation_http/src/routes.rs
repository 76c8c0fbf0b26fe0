//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// Everything is also served under `/api`, where the former serverless entry
/// point lived, together with its legacy aliases.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_upload_bytes;

    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Classification API
        .route("/classify", post(handlers::classify::classify))
        .route("/classify-file", post(handlers::classify_file::classify_file))
        .route("/upload", post(handlers::upload::upload))
        .nest("/api", legacy_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

fn legacy_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::legacy_health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/classify", post(handlers::classify::classify))
        .route("/classify-email", post(handlers::classify::classify))
        .route("/analyze", post(handlers::classify::classify))
        .route("/classify-file", post(handlers::classify_file::classify_file))
        .route("/classify_file", post(handlers::classify_file::classify_file))
        .route("/analyze-upload", post(handlers::classify_file::classify_file))
        .route("/upload", post(handlers::upload::upload))
        .route("/file", post(handlers::upload::upload))
}

/// CORS policy for the configured origins
///
/// An empty list allows any origin, method and header. Credentials are never
/// allowed.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Skipping unparsable CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
