use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Per-request failure, mapped to a structured JSON error response.
///
/// Invalid input, unroutable requests and internal failures each carry
/// a distinct status code; none of them crash the process.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<salai_core::Error> for ApiError {
    fn from(error: salai_core::Error) -> Self {
        use salai_core::Error;
        match error {
            Error::NoRouteFound | Error::NoPointsFound => {
                ApiError::NotFound("Could not calculate route".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
