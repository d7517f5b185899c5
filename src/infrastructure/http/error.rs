use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::DomainError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation or strategy error from the analyzer
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Body was not a valid request
    #[error("Invalid request body: {0}")]
    Json(#[from] JsonRejection),

    /// Malformed query parameter
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// Every client error is a 400, including bodies axum would answer
    /// with 415 or 422.
    pub const fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Machine-readable error kind for the response body
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Domain(err) => err.kind(),
            Self::Json(_) | Self::BadRequest(_) => "ValidationError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "request rejected");

        let body = Json(json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }));
        (status, body).into_response()
    }
}
