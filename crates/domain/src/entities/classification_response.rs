//! Shaped result of a classification request

use serde::{Deserialize, Serialize};

use super::{ClassificationResult, ExtractionMetadata};
use crate::value_objects::{Category, LanguageCode};

/// Tokenization details, only exposed when diagnostics are enabled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub tokens: Vec<String>,
    pub token_count: usize,
}

impl Diagnostics {
    /// Wrap a token list, recording its length
    #[must_use]
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let token_count = tokens.len();
        Self {
            tokens,
            token_count,
        }
    }
}

/// Final answer for one email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub category: Category,
    /// Always within `[0.0, 1.0]`
    pub confidence: f64,
    pub suggested_reply: String,
    pub language: LanguageCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Diagnostics>,
}

impl ClassificationResponse {
    /// Assemble a response from a validated result
    #[must_use]
    pub fn new(
        result: ClassificationResult,
        suggested_reply: impl Into<String>,
        language: LanguageCode,
    ) -> Self {
        Self {
            category: result.category,
            confidence: result.confidence,
            suggested_reply: suggested_reply.into(),
            language,
            diagnostics: None,
        }
    }

    /// Attach tokenization diagnostics
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }
}

/// Classification of an uploaded document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentClassification {
    pub response: ClassificationResponse,
    /// Original file name as uploaded
    pub file_name: String,
    pub extraction: ExtractionMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_count_tokens() {
        let diagnostics = Diagnostics::from_tokens(vec!["fatura".into(), "prazo".into()]);
        assert_eq!(diagnostics.token_count, 2);
    }

    #[test]
    fn response_copies_result() {
        let result = ClassificationResult::new(Category::Unproductive, 0.8);
        let response = ClassificationResponse::new(result, "ok", LanguageCode::En);
        assert_eq!(response.category, Category::Unproductive);
        assert!((response.confidence - 0.8).abs() < f64::EPSILON);
        assert_eq!(response.language, LanguageCode::En);
        assert!(response.diagnostics.is_none());
    }

    #[test]
    fn diagnostics_omitted_from_json_when_absent() {
        let result = ClassificationResult::new(Category::Productive, 0.5);
        let response = ClassificationResponse::new(result, "reply", LanguageCode::Pt);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("diagnostics"));
    }

    #[test]
    fn with_diagnostics_attaches_tokens() {
        let result = ClassificationResult::new(Category::Productive, 0.5);
        let response = ClassificationResponse::new(result, "reply", LanguageCode::Pt)
            .with_diagnostics(Diagnostics::from_tokens(vec!["anexo".into()]));
        assert_eq!(response.diagnostics.map(|d| d.token_count), Some(1));
    }
}
