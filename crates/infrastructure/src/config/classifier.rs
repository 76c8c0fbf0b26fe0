//! Classification pipeline settings.

use application::{ClassificationSettings, DEFAULT_MIN_EXTRACTED_CHARS};
use serde::{Deserialize, Serialize};

use crate::{adapters::ExtractionLimits, prompts::DEFAULT_ORGANIZATION_PROFILE};

/// Classification pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Expose normalized tokens in responses
    #[serde(default)]
    pub debug_diagnostics: bool,

    /// PDF pages read at most
    #[serde(default = "default_pdf_max_pages")]
    pub pdf_max_pages: u32,

    /// Characters of extracted text kept at most
    #[serde(default = "default_text_max_chars")]
    pub text_max_chars: usize,

    /// Extracted documents shorter than this are rejected
    #[serde(default = "default_min_extracted_chars")]
    pub min_extracted_chars: usize,

    /// Organization described to the provider
    #[serde(default = "default_organization_profile")]
    pub organization_profile: String,
}

const fn default_pdf_max_pages() -> u32 {
    30
}

const fn default_text_max_chars() -> usize {
    12000
}

const fn default_min_extracted_chars() -> usize {
    DEFAULT_MIN_EXTRACTED_CHARS
}

fn default_organization_profile() -> String {
    DEFAULT_ORGANIZATION_PROFILE.to_string()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            debug_diagnostics: false,
            pdf_max_pages: default_pdf_max_pages(),
            text_max_chars: default_text_max_chars(),
            min_extracted_chars: default_min_extracted_chars(),
            organization_profile: default_organization_profile(),
        }
    }
}

impl ClassifierConfig {
    /// Orchestrator settings
    #[must_use]
    pub const fn settings(&self) -> ClassificationSettings {
        ClassificationSettings {
            debug_diagnostics: self.debug_diagnostics,
            min_extracted_chars: self.min_extracted_chars,
        }
    }

    /// Extraction caps
    #[must_use]
    pub const fn limits(&self) -> ExtractionLimits {
        ExtractionLimits {
            pdf_max_pages: self.pdf_max_pages,
            text_max_chars: self.text_max_chars,
        }
    }
}
