// src/web/error.rs
// Mapping from service errors to HTTP responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::error::ForesightError;

/// Generic message for every server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong";

/// Message for bodies that are not a JSON decision request
pub const INVALID_BODY_MESSAGE: &str = "invalid request body";

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal,
}

impl From<ForesightError> for ApiError {
    fn from(err: ForesightError) -> Self {
        match err {
            ForesightError::InvalidInput(message) => ApiError::BadRequest(message),
            other => {
                // Full detail stays in the server log only
                error!(error = %other, "Request failed");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
