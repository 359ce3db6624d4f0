//! Annotation CRUD and generation handlers

use crate::error::ApiResult;
use crate::state::AppState;
use anno_domain::Annotation;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Save response body
#[derive(Serialize)]
pub struct SaveResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Generation request body
#[derive(Deserialize)]
pub struct GenerateRequest {
    /// Identifier of the document to annotate
    pub document_id: String,
    /// Identifier of the code file to annotate
    pub code_id: String,
}

/// POST /api/annotations
///
/// Stores the submitted annotation under a fresh identifier and returns
/// the stored record.
pub async fn create_annotation(
    State(state): State<AppState>,
    Json(annotation): Json<Annotation>,
) -> ApiResult<Json<Annotation>> {
    Ok(Json(state.annotations.create(annotation).await?))
}

/// GET /api/annotations/{id}
pub async fn get_annotation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Annotation>> {
    Ok(Json(state.annotations.get(&id).await?))
}

/// POST /api/annotations/{id}/save
///
/// 404 unless the id was created first; on success the record is
/// overwritten in memory and written to disk as JSON.
pub async fn save_annotation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(annotation): Json<Annotation>,
) -> ApiResult<Json<SaveResponse>> {
    state.annotations.save(&id, annotation).await?;
    Ok(Json(SaveResponse {
        message: "Annotation saved successfully".to_string(),
    }))
}

/// POST /api/annotations/generate
///
/// Returns the proposed annotation without storing it; persisting the
/// proposal requires a separate create or save call.
pub async fn generate_annotation(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<Json<Annotation>> {
    let annotation = state
        .generation
        .generate(&request.document_id, &request.code_id)
        .await?;
    Ok(Json(annotation))
}
