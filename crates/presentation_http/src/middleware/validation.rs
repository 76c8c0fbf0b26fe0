//! Request validation
//!
//! `ValidatedJson` deserializes a JSON body and runs its `validator` rules.
//! Malformed JSON and failed rules are answered with 400, oversized bodies
//! with 413.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] JsonRejection),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string);
                    format!("{field}: {message}")
                })
            })
            .collect();
        messages.sort();
        Self::ValidationFailed(messages.join("; "))
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let error = match self {
            Self::JsonError(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                ApiError::PayloadTooLarge(rejection.body_text())
            },
            Self::JsonError(rejection) => ApiError::BadRequest(rejection.body_text()),
            Self::ValidationFailed(msg) => ApiError::BadRequest(msg),
        };
        error.into_response()
    }
}

/// A JSON extractor that also validates the request body
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
