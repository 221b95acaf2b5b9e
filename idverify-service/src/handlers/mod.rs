pub mod app;
pub mod id_extractor;
pub mod liveness;

use axum::extract::multipart::{Multipart, MultipartError};

/// A single file pulled out of a multipart form.
pub struct UploadedFile {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Find the named field in a multipart form and read it fully into memory.
///
/// Unrelated fields are skipped. Returns `Ok(None)` when the form has no
/// field with that name. Errors carry the status the transport layer chose,
/// including 413 when the body limit was hit mid-read.
pub async fn read_upload(
    multipart: &mut Multipart,
    field_name: &str,
) -> Result<Option<UploadedFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(field_name) {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await?.to_vec();

        return Ok(Some(UploadedFile {
            bytes,
            content_type,
        }));
    }

    Ok(None)
}
