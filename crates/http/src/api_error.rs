//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a `{"detail": "..."}`
//! body. Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use stepform_service::ServiceError;

/// Fixed detail for every request that references an unknown session.
pub const SESSION_NOT_FOUND: &str = "Form session not found";

#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found: the referenced session does not exist.
    NotFound(String),
    /// Request body could not be read as the expected JSON shape. Carries
    /// the status chosen by the extractor (400, 415 or 422).
    Rejected(StatusCode, String),
    /// 500 Internal Server Error. Carries the underlying failure's message.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Rejected(status, msg) => (status, msg),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            },
        };
        (status, Json(serde_json::json!({"detail": detail}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_not_found() {
            Self::NotFound(SESSION_NOT_FOUND.to_owned())
        } else {
            Self::Internal(err.detail())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection.status(), rejection.body_text())
    }
}
