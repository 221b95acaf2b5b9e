use askama::Template;
use axum::response::{IntoResponse, Json};
use serde_json::json;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Landing page.
pub async fn index() -> impl IntoResponse {
    IndexTemplate {}
}

/// Health check endpoint for container liveness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "idverify-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
