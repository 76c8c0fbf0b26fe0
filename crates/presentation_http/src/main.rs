//! Mail triage HTTP server
//!
//! Main entry point for the classification API.

use std::{sync::Arc, time::Duration};

use application::ClassificationService;
use infrastructure::{AppConfig, DocumentTextExtractor, build_gateway};
use presentation_http::{
    RequestIdLayer, cors_layer, routes, set_expose_internal_errors, state::AppState,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let dotenv_path = dotenvy::dotenv().ok();

    let loaded = AppConfig::load();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => {
            let mut config = AppConfig::default();
            config.apply_legacy_env(|key| std::env::var(key).ok());
            config
        },
    };

    init_tracing(config.server.json_logs());

    info!("📬 Mail triage v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_path {
        info!(path = %path.display(), "Loaded .env file");
    }
    if let Err(e) = loaded {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = config.server.port,
        model = %config.inference.default_model,
        debug_diagnostics = config.classifier.debug_diagnostics,
        "Configuration loaded"
    );

    set_expose_internal_errors(config.expose_internal_errors());

    let gateway = build_gateway(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize classification gateway: {e}"))?;
    let extractor = Arc::new(DocumentTextExtractor::new(config.classifier.limits()));
    let service = ClassificationService::new(gateway, extractor, config.classifier.settings());
    info!(gateway = service.gateway_name(), "Classification gateway ready");

    let cors = cors_layer(&config.server);
    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    let state = AppState::new(service, config);

    // Add middleware (last added = outermost)
    let app = routes::create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new());

    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mailtriage_server=debug,presentation_http=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for Ctrl+C or SIGTERM
///
/// Once a signal arrives, in-flight requests get `timeout` to finish before
/// the process exits regardless.
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        warn!("Shutdown timeout elapsed, exiting");
        std::process::exit(0);
    });
}
