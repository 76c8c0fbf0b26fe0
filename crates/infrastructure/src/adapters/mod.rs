//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod document_text_extractor;
mod heuristic_classification_gateway;
mod llm_classification_gateway;

pub use document_text_extractor::{DocumentTextExtractor, ExtractionLimits, TRUNCATION_MARKER};
pub use heuristic_classification_gateway::{HEURISTIC_CONFIDENCE, HeuristicClassificationGateway};
pub use llm_classification_gateway::{
    LlmClassificationGateway, LlmGatewaySettings, strip_subject_lines,
};
