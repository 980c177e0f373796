use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use calcutel_norms::ScoringError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    Scoring(ScoringError),
    /// Request could not be parsed into the expected shape.
    BadRequest(String),
}

/// Every error response has this shape. `kind` is stable and meant for
/// branching; `error` is for humans.
#[derive(Serialize)]
struct ErrorBody {
    kind: &'static str,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            ApiError::Scoring(e) => {
                let status = match e {
                    ScoringError::UnknownTest(_) | ScoringError::NoBandFound { .. } => {
                        StatusCode::NOT_FOUND
                    }
                    ScoringError::OutOfRange { .. } | ScoringError::InvalidInput(_) => {
                        StatusCode::BAD_REQUEST
                    }
                };
                (status, e.kind(), e.to_string())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "invalid_input", msg),
        };

        (status, Json(ErrorBody { kind, error: message })).into_response()
    }
}

impl From<ScoringError> for ApiError {
    fn from(e: ScoringError) -> Self {
        ApiError::Scoring(e)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}
