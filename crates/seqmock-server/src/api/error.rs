use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use seqmock_core::SeqMockError;

use super::types::ErrorResponse;

/// Errors surfaced to HTTP clients
///
/// The detail string is for logs only; the wire body is always the fixed
/// `{"error": "<code>"}` shape.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
        }
    }
}

impl From<&SeqMockError> for ApiError {
    fn from(err: &SeqMockError) -> Self {
        Self::not_found(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.code().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status_and_code() {
        let err = ApiError::not_found("GET /nope");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.to_string(), "not found: GET /nope");
    }

    #[test]
    fn test_from_domain_error_keeps_detail() {
        let err = ApiError::from(&SeqMockError::InvalidBatchId {
            batch_id: "xyz".to_string(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("xyz"));
    }
}
