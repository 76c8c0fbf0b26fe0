//! Application services - Use case implementations

mod classification_service;
mod language_resolver;
mod text_normalizer;

pub use classification_service::{
    ClassificationService, ClassificationSettings, DEFAULT_MIN_EXTRACTED_CHARS, LanguageHeaders,
};
pub use language_resolver::{LanguageSignals, resolve_language};
pub use text_normalizer::{is_stop_word, normalize, strip_diacritics};
