//! HTTP mapping for domain errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::domain::errors::DomainError;

/// Wrapper giving `DomainError` an HTTP representation.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            DomainError::ProductNotFound(_) | DomainError::CategoryNotFound(_) => {
                (StatusCode::NOT_FOUND, json!({ "error": self.0.to_string() }))
            }
            DomainError::ValidationFailed(errors) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": errors }))
            }
            other => {
                error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": other.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
