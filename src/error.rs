// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::todos::Violation;

/// HTTP API error with the status code and client-safe body baked in.
///
/// Every failure here is request-scoped; nothing is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("request body failed validation")]
    Validation(Vec<Violation>),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation(violations: Vec<Violation>) -> Self {
        ApiError::Validation(violations)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<crate::auth::JwtError> for ApiError {
    fn from(err: crate::auth::JwtError) -> Self {
        match err {
            crate::auth::JwtError::TokenValidation(_) => ApiError::unauthorized(err.to_string()),
            crate::auth::JwtError::TokenGeneration(_) | crate::auth::JwtError::InvalidSecret => {
                ApiError::internal(err.to_string())
            }
        }
    }
}

// Automatic HTTP response conversion for axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        match self {
            // Validation responses carry the raw violation list as the body.
            ApiError::Validation(violations) => (status, Json(violations)).into_response(),
            ApiError::Internal(message) => {
                // Log the real error but keep the response generic.
                tracing::error!("internal error: {message}");
                let body = json!({ "error": true, "message": "internal server error" });
                (status, Json(body)).into_response()
            }
            other => {
                let body = json!({ "error": true, "message": other.to_string() });
                (status, Json(body)).into_response()
            }
        }
    }
}
