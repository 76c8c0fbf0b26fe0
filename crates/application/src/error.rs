//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::ports::ExtractionError;

/// Errors that can occur in the application layer
///
/// Provider failures never show up here: the classification gateway absorbs
/// them. Only request-shape and extraction problems reach the caller.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Document could not be turned into text
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Extracted text is too short to classify
    #[error("Extracted text too short: {found} characters, at least {required} required")]
    InsufficientText {
        /// Characters found after trimming
        found: usize,
        /// Minimum accepted
        required: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the caller sent something unusable, as opposed to a server fault
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Domain(_) | Self::Extraction(_) | Self::InsufficientText { .. }
        )
    }
}
