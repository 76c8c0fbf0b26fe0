//! Text extraction port
//!
//! Turns an uploaded blob into plain text plus extraction metadata.

use async_trait::async_trait;
use domain::ExtractionResult;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Errors raised while extracting text from an upload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// File name does not carry a recognized extension
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// Document structure could not be read
    #[error("Unreadable document: {0}")]
    CorruptDocument(String),
}

/// Port for document text extraction
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextExtractorPort: Send + Sync {
    /// Extract text from `blob`, choosing the decoder from `filename`
    ///
    /// Empty or unreadable pages contribute nothing and are not errors.
    async fn extract(&self, blob: &[u8], filename: &str)
        -> Result<ExtractionResult, ExtractionError>;
}
