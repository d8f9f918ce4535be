//! Error envelope shared by every HTTP endpoint.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::bad_request(message),
        }
    }

    /// Maps a domain error to a status code and envelope.
    ///
    /// Storage and internal failures are logged in full; their message only
    /// reaches the client when `verbose` is set.
    pub fn from_domain(err: DomainError, verbose: bool) -> Self {
        let status = match err.code {
            ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorCode::InvalidWeightTable => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::LimitExceeded => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorCode::WeightTableNotFound
            | ErrorCode::ResultNotFound
            | ErrorCode::TeamNotFound => StatusCode::NOT_FOUND,
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(code = %err.code, error = %err.message, "Request failed");
            if !verbose {
                return Self {
                    status,
                    body: ErrorResponse::internal("An internal error occurred"),
                };
            }
        }

        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };

        Self {
            status,
            body: ErrorResponse {
                code: err.code.to_string(),
                message: err.message,
                details,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_codes_map_to_404() {
        for code in [
            ErrorCode::WeightTableNotFound,
            ErrorCode::ResultNotFound,
            ErrorCode::TeamNotFound,
        ] {
            let err = ApiError::from_domain(DomainError::new(code, "missing"), false);
            assert_eq!(err.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn validation_keeps_details() {
        let err = ApiError::from_domain(DomainError::validation("score", "too high"), false);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body.code, "VALIDATION_FAILED");
        assert_eq!(err.body.details, Some(serde_json::json!({ "field": "score" })));
    }

    #[test]
    fn database_message_is_hidden_unless_verbose() {
        let quiet = ApiError::from_domain(DomainError::database("Failed to save", "connection refused"), false);
        assert_eq!(quiet.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!quiet.body.message.contains("connection refused"));

        let verbose = ApiError::from_domain(DomainError::database("Failed to save", "connection refused"), true);
        assert!(verbose.body.message.contains("connection refused"));
        assert_eq!(verbose.body.code, "DATABASE_ERROR");
    }

    #[test]
    fn limit_exceeded_is_payload_too_large() {
        let err = ApiError::from_domain(DomainError::new(ErrorCode::LimitExceeded, "big"), false);
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
