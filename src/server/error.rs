use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::ErrorResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`crate::Error`] for pipeline failures and adds the caller-input
/// variant. Every error renders as `{"error": message}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure from the segmentation or image generation step.
    #[error(transparent)]
    Pipeline(#[from] crate::Error),

    /// The request body could not be bound.
    #[error("{0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Pipeline(err) => {
                tracing::error!(error = %err, "Comic generation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
