//! Error to HTTP response mapping
//!
//! Failure bodies are `{ "detail": <string> }`. NotFound surfaces as
//! 404 with the resource named; chat/generation failures surface as 500
//! with the underlying message embedded; anything else is logged and
//! collapsed to a generic 500 so internals do not leak to the client.

use anno_domain::error::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// Result alias for handler functions
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Wrapper turning a domain error into an HTTP response
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

/// JSON failure body
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            Error::InvalidArgument { .. } => (StatusCode::BAD_REQUEST, self.0.to_string()),
            Error::Generation { .. } | Error::Chat { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
            }
            other => {
                error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use anno_domain::error::Error;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::from(Error::not_found("document x")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn generation_failure_maps_to_500() {
        let response = ApiError::from(Error::generation("bad output")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn io_fault_maps_to_generic_500() {
        let io = std::io::Error::other("disk full");
        let response = ApiError::from(Error::from(io)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
