use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{ErrorResponse, ValidationError};
use thiserror::Error;

use crate::notify::NotifyError;

pub const GENERIC_ERROR: &str = "An unexpected error occurred. Please try again later.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid json in request body")]
    InvalidJson,

    #[error("validation failed")]
    Validation(Vec<ValidationError>),

    #[error("Notify Error: {0}")]
    Notify(#[from] NotifyError),

    #[error("Serde Json Error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidJson => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid JSON in request body".to_owned(),
                    details: None,
                }),
            )
                .into_response(),

            Self::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Validation failed".to_owned(),
                    details: Some(details),
                }),
            )
                .into_response(),

            Self::Notify(e) => convert_error(&e),
            Self::SerdeJson(e) => convert_error(&e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

// only the error's type ends up in the log, never its content
fn convert_error<E: std::error::Error>(_e: &E) -> Response {
    tracing::error!("unexpected error: {}", std::any::type_name::<E>());

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: GENERIC_ERROR.to_owned(),
            details: None,
        }),
    )
        .into_response()
}
