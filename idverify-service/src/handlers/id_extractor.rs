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
#[template(path = "id_extractor.html")]
pub struct IdExtractorTemplate {}

/// Upload form for ID document images.
pub async fn id_extractor_page() -> impl IntoResponse {
    IdExtractorTemplate {}
}

/// Accept an ID image, run field extraction, and relay the model's text
/// verbatim alongside a base64 echo of the uploaded bytes.
pub async fn id_extractor_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let upload = match read_upload(&mut multipart, "id_image").await {
        Ok(Some(upload)) => upload,
        Ok(None) => return Json(json!({"error": "No file uploaded"})).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read id_image upload");
            return e.into_response();
        }
    };

    tracing::info!(
        bytes = upload.bytes.len(),
        content_type = %upload.content_type,
        "Received ID image for extraction"
    );

    let encoded = general_purpose::STANDARD.encode(&upload.bytes);
    let media = InlineMedia::new(upload.content_type, upload.bytes);

    let result = match state.analyzer.extract_id_fields(media).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "ID extraction call failed");
            format!("Error analyzing image: {}", e)
        }
    };

    Json(json!({
        "result": result,
        "image": encoded,
    }))
    .into_response()
}
