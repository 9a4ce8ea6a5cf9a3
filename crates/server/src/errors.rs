use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Everything a handler can answer with besides success.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Employee not found")]
    NotFound,
    #[error("invalid employee data: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("Failed to persist employees")]
    Storage(#[source] service::StorageError),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Validation(v) => ApiError::Validation(v.into_messages()),
            ServiceError::Storage(s) => ApiError::Storage(s),
        }
    }
}

/// Unparsable bodies are reported the same way as failed field checks.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![rejection.body_text()])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "Employee not found"}))).into_response()
            }
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(serde_json::json!({"errors": errors}))).into_response()
            }
            ApiError::Storage(source) => {
                error!(error = %source, "write to employee store failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": "Failed to persist employees"})),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
