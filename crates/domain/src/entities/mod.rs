//! Domain entities - Request-scoped objects of a classification

mod classification_request;
mod classification_response;
mod classification_result;
mod extraction;

pub use classification_request::ClassificationRequest;
pub use classification_response::{ClassificationResponse, Diagnostics, DocumentClassification};
pub use classification_result::ClassificationResult;
pub use extraction::{ExtractionMetadata, ExtractionResult, SourceKind};
