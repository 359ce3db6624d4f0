//! Router construction

use crate::handlers::{annotations, code, documents};
use crate::state::AppState;
use anno_domain::error::{Error, Result};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the API router.
///
/// Cross-origin requests are permitted only from `cors_origin`; all
/// methods and headers are allowed from that origin.
pub fn create_router(state: AppState, cors_origin: &str) -> Result<Router> {
    let origin: HeaderValue = cors_origin.parse().map_err(|_| {
        Error::configuration(format!("Invalid CORS origin: {cors_origin}"))
    })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/api/documents/upload", post(documents::upload_document))
        .route("/api/documents/{id}", get(documents::get_document))
        .route("/api/code/upload", post(code::upload_code))
        .route("/api/code/{id}", get(code::get_code_file))
        .route("/api/annotations", post(annotations::create_annotation))
        .route(
            "/api/annotations/generate",
            post(annotations::generate_annotation),
        )
        .route("/api/annotations/{id}", get(annotations::get_annotation))
        .route(
            "/api/annotations/{id}/save",
            post(annotations::save_annotation),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(router)
}
