//! Request handlers
//!
//! One module per resource, mirroring the route layout:
//! documents, code files, and annotations (including generation).

/// Annotation CRUD and generation handlers
pub mod annotations;
/// Code file upload and fetch handlers
pub mod code;
/// Document upload and fetch handlers
pub mod documents;

use crate::error::ApiError;
use anno_domain::error::Error;
use axum::extract::Multipart;
use serde::Serialize;

/// Upload response body: the stored identifier plus the declared name
#[derive(Serialize)]
pub struct UploadResponse {
    /// Identifier assigned to the stored record
    pub id: String,
    /// Filename declared in the upload
    pub name: String,
}

/// Pull the `file` field out of a multipart upload.
///
/// Returns the declared filename and the raw payload bytes; decoding
/// happens in the library service.
pub(crate) async fn read_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::invalid_argument(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let name = field.file_name().unwrap_or("unnamed").to_string();
            let payload = field
                .bytes()
                .await
                .map_err(|e| Error::invalid_argument(format!("Could not read upload: {e}")))?;
            return Ok((name, payload.to_vec()));
        }
    }
    Err(Error::invalid_argument("Upload is missing a file field").into())
}
