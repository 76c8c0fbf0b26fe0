//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Language code outside the supported set
    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),

    /// Category label outside the supported set
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_creates_correct_error() {
        let err = DomainError::validation("body is required");
        match err {
            DomainError::ValidationError(msg) => assert_eq!(msg, "body is required"),
            _ => unreachable!("Expected ValidationError"),
        }
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("field is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: field is required");
    }

    #[test]
    fn invalid_language_error_message() {
        let err = DomainError::InvalidLanguage("fr".to_string());
        assert_eq!(err.to_string(), "Invalid language code: fr");
    }

    #[test]
    fn invalid_category_error_message() {
        let err = DomainError::InvalidCategory("Spam".to_string());
        assert_eq!(err.to_string(), "Invalid category: Spam");
    }
}
