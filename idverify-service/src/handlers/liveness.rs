use crate::handlers::read_upload;
use crate::services::providers::InlineMedia;
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Json, Response},
};
use base64::{engine::general_purpose, Engine as _};
use serde_json::json;

#[derive(Template)]
#[template(path = "liveness.html")]
pub struct LivenessTemplate {}

/// Upload form for liveness check videos.
pub async fn liveness_page() -> impl IntoResponse {
    LivenessTemplate {}
}

/// Accept a video, run the liveness assessment, and relay the model's text
/// verbatim alongside a base64 echo of the uploaded bytes.
pub async fn liveness_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let upload = match read_upload(&mut multipart, "video").await {
        Ok(Some(upload)) => upload,
        Ok(None) => return Json(json!({"error": "No video uploaded"})).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read video upload");
            return e.into_response();
        }
    };

    tracing::info!(
        bytes = upload.bytes.len(),
        content_type = %upload.content_type,
        "Received video for liveness check"
    );

    let encoded = general_purpose::STANDARD.encode(&upload.bytes);
    let media = InlineMedia::new(upload.content_type, upload.bytes);

    let result = match state.analyzer.assess_liveness(media).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "Liveness check call failed");
            format!("Liveness Check Error: {}", e)
        }
    };

    Json(json!({
        "result": result,
        "video": encoded,
    }))
    .into_response()
}
