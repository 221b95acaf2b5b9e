//! Router assembly and server lifecycle.

use crate::config::{IdverifyConfig, GEMINI_MODEL};
use crate::handlers::{
    app::{health_check, index},
    id_extractor::{id_extractor_handler, id_extractor_page},
    liveness::{liveness_handler, liveness_page},
};
use crate::services::providers::gemini::{GeminiConfig, GeminiVisionProvider};
use crate::services::Analyzer;
use crate::AppState;
use axum::{extract::DefaultBodyLimit, middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::request_id_middleware;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Hard cap on request bodies. Uploads past this are rejected with 413 before
/// any analysis runs; the body is never truncated.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route(
            "/id_extractor",
            get(id_extractor_page).post(id_extractor_handler),
        )
        .route("/liveness", get(liveness_page).post(liveness_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: IdverifyConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            project_id: config.google.project_id.clone(),
            location: config.google.location.clone(),
            model: GEMINI_MODEL.to_string(),
            api_key: config.google.api_key.clone(),
        };
        let provider = Arc::new(GeminiVisionProvider::new(gemini_config));

        tracing::info!(
            model = GEMINI_MODEL,
            location = %config.google.location,
            "Initialized Gemini vision provider"
        );

        let state = AppState::new(Arc::new(Analyzer::new(provider)));

        // Bind the listener (port 0 = random port for testing)
        let address = format!("{}:{}", config.common.host, config.common.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        tracing::info!("idverify-service listening on port {}", self.port);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
