use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Conflict(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<steady_storage::error::StorageError> for ApiError {
    fn from(e: steady_storage::error::StorageError) -> Self {
        match e {
            steady_storage::error::StorageError::NotFound { key } => {
                ApiError::NotFound(format!("object not found: {key}"))
            }
            steady_storage::error::StorageError::PreconditionFailed { key } => {
                ApiError::Conflict(format!("row changed concurrently: {key}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<steady_auth::error::AuthError> for ApiError {
    fn from(e: steady_auth::error::AuthError) -> Self {
        use steady_auth::error::AuthError;
        match e {
            AuthError::AuthFailed(msg) => ApiError::Unauthorized(msg),
            AuthError::SignUpFailed(msg) => ApiError::BadRequest(msg),
            AuthError::TokenExpired => ApiError::Unauthorized("token expired".to_string()),
            AuthError::InvalidToken(msg) => ApiError::Unauthorized(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<steady_bedrock::error::BedrockError> for ApiError {
    fn from(e: steady_bedrock::error::BedrockError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<steady_core::error::CoreError> for ApiError {
    fn from(e: steady_core::error::CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
