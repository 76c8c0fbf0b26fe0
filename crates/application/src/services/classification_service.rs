//! Classification service - request orchestration
//!
//! Validates the request, resolves the reply language, extracts document
//! text when needed, asks the gateway for a category, and composes the
//! suggested reply.

use std::{fmt, sync::Arc};

use domain::{
    Category, ClassificationRequest, ClassificationResponse, ClassificationResult, Diagnostics,
    DocumentClassification, DomainError, LanguageCode, LanguageHint, LocaleProfile,
};
use tracing::{debug, info, instrument};

use super::{LanguageSignals, normalize};
use crate::{
    error::ApplicationError,
    ports::{ClassificationGateway, EmailContent, TextExtractorPort},
};

/// Minimum characters an extracted document must yield
pub const DEFAULT_MIN_EXTRACTED_CHARS: usize = 5;

/// Orchestrator behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationSettings {
    /// Include tokenization diagnostics in responses
    pub debug_diagnostics: bool,
    /// Extracted documents shorter than this are rejected
    pub min_extracted_chars: usize,
}

impl Default for ClassificationSettings {
    fn default() -> Self {
        Self {
            debug_diagnostics: false,
            min_extracted_chars: DEFAULT_MIN_EXTRACTED_CHARS,
        }
    }
}

/// Language-related request headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageHeaders {
    /// `X-User-Lang`
    pub user_lang: Option<String>,
    /// `Accept-Language`
    pub accept_language: Option<String>,
}

impl LanguageHeaders {
    /// Create headers from optional values
    #[must_use]
    pub const fn new(user_lang: Option<String>, accept_language: Option<String>) -> Self {
        Self {
            user_lang,
            accept_language,
        }
    }

    fn signals<'a>(&'a self, hint: LanguageHint, text_sample: &'a str) -> LanguageSignals<'a> {
        LanguageSignals::from_text(text_sample)
            .with_hint(hint)
            .with_user_lang(self.user_lang.as_deref())
            .with_accept_language(self.accept_language.as_deref())
    }
}

/// Service classifying emails and uploaded documents
pub struct ClassificationService {
    gateway: Arc<dyn ClassificationGateway>,
    extractor: Arc<dyn TextExtractorPort>,
    settings: ClassificationSettings,
}

impl fmt::Debug for ClassificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationService")
            .field("gateway", &self.gateway.name())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ClassificationService {
    /// Create a new classification service
    pub fn new(
        gateway: Arc<dyn ClassificationGateway>,
        extractor: Arc<dyn TextExtractorPort>,
        settings: ClassificationSettings,
    ) -> Self {
        Self {
            gateway,
            extractor,
            settings,
        }
    }

    /// Name of the active gateway
    #[must_use]
    pub fn gateway_name(&self) -> &'static str {
        self.gateway.name()
    }

    /// Current settings
    #[must_use]
    pub const fn settings(&self) -> ClassificationSettings {
        self.settings
    }

    /// Classify an email
    ///
    /// Fails only when the body is blank; provider trouble is absorbed by
    /// the gateway.
    #[instrument(skip(self, request, headers), fields(body_len = request.body.len()))]
    pub async fn classify_email(
        &self,
        request: &ClassificationRequest,
        headers: &LanguageHeaders,
    ) -> Result<ClassificationResponse, ApplicationError> {
        request.ensure_valid()?;

        let sample = request.text_sample();
        let language = headers.signals(request.language_hint, &sample).resolve();
        debug!(%language, "Resolved language");

        let email = EmailContent::new(request.body.clone(), request.subject.clone());
        Ok(self.compose(&email, language).await)
    }

    /// Extract text from an uploaded document and classify it
    ///
    /// The file name stands in for the subject line.
    #[instrument(skip(self, blob, hint, headers), fields(size_bytes = blob.len()))]
    pub async fn classify_document(
        &self,
        blob: &[u8],
        file_name: &str,
        hint: LanguageHint,
        headers: &LanguageHeaders,
    ) -> Result<DocumentClassification, ApplicationError> {
        if blob.is_empty() {
            return Err(DomainError::validation("file is empty").into());
        }

        let extraction = self.extractor.extract(blob, file_name).await?;
        let found = extraction.trimmed_char_count();
        if found < self.settings.min_extracted_chars {
            return Err(ApplicationError::InsufficientText {
                found,
                required: self.settings.min_extracted_chars,
            });
        }

        let language = headers.signals(hint, &extraction.text).resolve();
        debug!(
            %language,
            pages = extraction.metadata.total_pages,
            pages_processed = extraction.metadata.pages_processed,
            "Extracted document text"
        );

        let email = EmailContent::new(extraction.text, Some(file_name.to_string()));
        let response = self.compose(&email, language).await;

        Ok(DocumentClassification {
            response,
            file_name: file_name.to_string(),
            extraction: extraction.metadata,
        })
    }

    async fn compose(&self, email: &EmailContent, language: LanguageCode) -> ClassificationResponse {
        let verdict = self.gateway.classify(email, language).await;
        let result = ClassificationResult::from_label(&verdict.label, verdict.confidence);

        let reply = match result.category {
            Category::Unproductive => LocaleProfile::for_language(language)
                .canned_unproductive
                .to_string(),
            Category::Productive => self.gateway.draft_reply(email, language).await,
        };

        info!(
            category = %result.category,
            confidence = result.confidence,
            %language,
            gateway = self.gateway.name(),
            "Classified email"
        );

        let response = ClassificationResponse::new(result, reply, language);
        if self.settings.debug_diagnostics {
            response.with_diagnostics(Diagnostics::from_tokens(normalize(&email.body, language)))
        } else {
            response
        }
    }
}
