//! Document upload and fetch handlers

use super::{read_upload, UploadResponse};
use crate::error::ApiResult;
use crate::state::AppState;
use anno_domain::Document;
use axum::extract::{Multipart, Path, State};
use axum::Json;

/// POST /api/documents/upload
pub async fn upload_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let (name, payload) = read_upload(multipart).await?;
    let document = state.library.upload_document(&name, payload).await?;
    Ok(Json(UploadResponse {
        id: document.id,
        name: document.name,
    }))
}

/// GET /api/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Document>> {
    Ok(Json(state.library.document(&id).await?))
}
