use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ApiResponse;

pub const MISSING_FIELDS_MESSAGE: &str = "All required fields must be filled in";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("invalid request body: {0}")]
    BadRequest(String),

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ApiResponse::failure(self.to_string()),
            ),
            AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, ApiResponse::failure(self.to_string()))
            }
            AppError::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::failure(MISSING_FIELDS_MESSAGE).with_fields(fields.iter().copied()),
            ),
            AppError::Internal(e) => {
                tracing::error!(error = %e, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure(INTERNAL_ERROR_MESSAGE),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
