//! Error types for the todos service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Handler-level error, rendered directly as an HTTP response.
///
/// The `Display` strings of the 400 variants are part of the wire
/// contract: clients receive them verbatim in `{"error": "..."}`.
/// `NotFound` carries no JSON body; the contract is asymmetric between
/// parse failures and missing records.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The `:id` path segment is not an integer.
    #[error("cannot parse id")]
    InvalidId,

    /// The create request body is not valid JSON.
    #[error("cannot parse json")]
    InvalidJson,

    /// The update request body is not valid JSON.
    #[error("cannot parse body")]
    InvalidBody,

    /// No record with the requested id.
    #[error("todo not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::InvalidId | ApiError::InvalidJson | ApiError::InvalidBody => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
        }
    }
}
