//! Code file upload and fetch handlers

use super::{read_upload, UploadResponse};
use crate::error::ApiResult;
use crate::state::AppState;
use anno_domain::CodeFile;
use axum::extract::{Multipart, Path, State};
use axum::Json;

/// POST /api/code/upload
pub async fn upload_code(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let (name, payload) = read_upload(multipart).await?;
    let code_file = state.library.upload_code(&name, payload).await?;
    Ok(Json(UploadResponse {
        id: code_file.id,
        name: code_file.name,
    }))
}

/// GET /api/code/{id}
pub async fn get_code_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CodeFile>> {
    Ok(Json(state.library.code_file(&id).await?))
}
