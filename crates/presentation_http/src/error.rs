//! API error handling
//!
//! Maps application failures onto HTTP statuses. In production mode internal
//! errors return a generic message without details.

use application::{ApplicationError, ports::ExtractionError};
use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Global flag to control error detail exposure
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses.
///
/// Production deployments set this to `false` so that only generic messages
/// leave the server.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            Self::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "unprocessable_entity",
                msg,
                None,
            ),
            Self::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", msg, None)
            },
            Self::Internal(msg) => {
                let details = should_expose_details().then_some(msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    details,
                )
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Extraction(e @ ExtractionError::UnsupportedFormat(_)) => {
                Self::BadRequest(e.to_string())
            },
            ApplicationError::Extraction(e @ ExtractionError::CorruptDocument(_)) => {
                Self::UnprocessableEntity(e.to_string())
            },
            e @ ApplicationError::InsufficientText { .. } => {
                Self::UnprocessableEntity(e.to_string())
            },
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(err.body_text())
        } else {
            Self::BadRequest(err.body_text())
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;

    #[test]
    fn api_error_messages() {
        assert_eq!(
            ApiError::BadRequest("invalid".to_string()).to_string(),
            "Bad request: invalid"
        );
        assert_eq!(
            ApiError::UnprocessableEntity("short".to_string()).to_string(),
            "Unprocessable entity: short"
        );
    }

    #[test]
    fn error_response_omits_missing_details() {
        let resp = ErrorResponse {
            error: "Bad request".to_string(),
            code: "bad_request".to_string(),
            details: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("code"));
        assert!(!json.contains("details"));
    }

    #[test]
    fn domain_error_is_bad_request() {
        let err: ApiError = ApplicationError::Domain(DomainError::validation("body is required")).into();
        assert!(matches!(err, ApiError::BadRequest(msg) if msg.contains("body is required")));
    }

    #[test]
    fn unsupported_format_is_bad_request() {
        let err: ApiError =
            ApplicationError::Extraction(ExtractionError::UnsupportedFormat(".docx".into())).into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn corrupt_document_is_unprocessable() {
        let err: ApiError =
            ApplicationError::Extraction(ExtractionError::CorruptDocument("xref".into())).into();
        assert!(matches!(err, ApiError::UnprocessableEntity(_)));
    }

    #[test]
    fn insufficient_text_is_unprocessable() {
        let err: ApiError = ApplicationError::InsufficientText {
            found: 2,
            required: 5,
        }
        .into();
        let ApiError::UnprocessableEntity(msg) = err else {
            unreachable!("Expected UnprocessableEntity");
        };
        assert!(msg.contains("at least 5"));
    }

    #[test]
    fn configuration_error_is_internal() {
        let err: ApiError = ApplicationError::Configuration("bad config".to_string()).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn into_response_statuses() {
        let cases = [
            (ApiError::BadRequest(String::new()), StatusCode::BAD_REQUEST),
            (
                ApiError::UnprocessableEntity(String::new()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::PayloadTooLarge(String::new()),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                ApiError::Internal(String::new()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
