//! Request handlers, one module per resource.

pub mod auth;
pub mod masterpiece;
pub mod package;

use axum::extract::multipart::Field;
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Acknowledgment body returned by the delete endpoints.
///
/// Always `{ "success": true }`: deletion is idempotent and does not
/// report whether a row actually matched.
#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub success: bool,
}

/// A file part read out of a multipart request.
pub(crate) struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Read a text field. Malformed multipart data is the client's fault.
pub(crate) async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Read a file field, keeping its advertised filename and content type.
pub(crate) async fn read_file(field: Field<'_>) -> Result<UploadedFile, AppError> {
    let filename = field.file_name().unwrap_or("upload").to_string();
    let content_type = field.content_type().map(|ct| ct.to_string());
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(UploadedFile {
        filename,
        content_type,
        data: data.to_vec(),
    })
}

/// Store an optional uploaded image through the active backend and
/// return the URL to persist as `image_url`.
///
/// No image (or an empty file part, which browsers send for an untouched
/// file input) persists the empty string. Upload and insert are
/// sequential, not transactional: an insert failure after a successful
/// upload leaves an orphaned asset behind.
pub(crate) async fn store_image(
    state: &AppState,
    image: Option<UploadedFile>,
) -> Result<String, AppError> {
    match image {
        Some(file) if !file.data.is_empty() => {
            let url = state
                .assets
                .store(&file.filename, file.content_type.as_deref(), file.data)
                .await?;
            Ok(url)
        }
        _ => Ok(String::new()),
    }
}
