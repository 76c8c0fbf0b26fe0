//! Classification gateway port
//!
//! Wraps the provider that decides a category and drafts replies. Adapters
//! absorb every provider failure, so neither operation is fallible.

use async_trait::async_trait;
use domain::{Category, LanguageCode};
#[cfg(test)]
use mockall::automock;

/// Confidence reported when the provider gave no usable answer
pub const CONSERVATIVE_CONFIDENCE: f64 = 0.5;

/// Email text handed to the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub body: String,
    pub subject: Option<String>,
}

impl EmailContent {
    /// Create content from a body and an optional subject
    pub fn new(body: impl Into<String>, subject: Option<String>) -> Self {
        Self {
            body: body.into(),
            subject,
        }
    }

    /// Subject with blank values treated as absent
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Unvalidated answer from a classification provider
///
/// The label may be anything the provider produced and the confidence may
/// fall outside `[0.0, 1.0]`; the orchestrator coerces both.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayVerdict {
    pub label: String,
    pub confidence: f64,
}

impl GatewayVerdict {
    /// Create a verdict
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    /// Verdict used whenever the provider fails
    #[must_use]
    pub fn conservative() -> Self {
        Self::new(Category::Productive.as_str(), CONSERVATIVE_CONFIDENCE)
    }
}

/// Port for email classification and reply drafting
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClassificationGateway: Send + Sync {
    /// Decide the category of an email
    ///
    /// Never fails: provider errors yield [`GatewayVerdict::conservative`].
    async fn classify(&self, email: &EmailContent, language: LanguageCode) -> GatewayVerdict;

    /// Draft a reply in the given language
    ///
    /// Never fails: provider errors yield the localized fallback reply.
    async fn draft_reply(&self, email: &EmailContent, language: LanguageCode) -> String;

    /// Short name for logs and readiness reports
    fn name(&self) -> &'static str;
}
