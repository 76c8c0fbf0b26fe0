//! Text extracted from an uploaded document

use std::fmt;

use serde::{Deserialize, Serialize};

/// Format of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Plain text
    Txt,
    /// Portable Document Format
    Pdf,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Txt => f.write_str("txt"),
            Self::Pdf => f.write_str("pdf"),
        }
    }
}

/// Metadata describing how text was extracted
///
/// Invariants: `pages_processed <= total_pages` and `pages_processed`
/// never exceeds the page cap used for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    #[serde(rename = "type")]
    pub source_kind: SourceKind,
    /// Pages in the document (1 for plain text)
    #[serde(rename = "pages")]
    pub total_pages: u32,
    /// Pages actually read
    pub pages_processed: u32,
    /// Size of the uploaded blob
    #[serde(rename = "size_bytes")]
    pub byte_size: usize,
    /// Whether the text was cut at the character cap
    pub truncated: bool,
}

impl ExtractionMetadata {
    /// Metadata for a plain-text blob
    #[must_use]
    pub const fn plain_text(byte_size: usize, truncated: bool) -> Self {
        Self {
            source_kind: SourceKind::Txt,
            total_pages: 1,
            pages_processed: 1,
            byte_size,
            truncated,
        }
    }

    /// Metadata for a PDF, capping processed pages at `max_pages`
    #[must_use]
    pub fn pdf(total_pages: u32, max_pages: u32, byte_size: usize, truncated: bool) -> Self {
        Self {
            source_kind: SourceKind::Pdf,
            total_pages,
            pages_processed: total_pages.min(max_pages),
            byte_size,
            truncated,
        }
    }
}

/// Extracted text together with its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub text: String,
    pub metadata: ExtractionMetadata,
}

impl ExtractionResult {
    /// Number of characters once surrounding whitespace is trimmed
    #[must_use]
    pub fn trimmed_char_count(&self) -> usize {
        self.text.trim().chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_has_one_page() {
        let meta = ExtractionMetadata::plain_text(42, false);
        assert_eq!(meta.source_kind, SourceKind::Txt);
        assert_eq!(meta.total_pages, 1);
        assert_eq!(meta.pages_processed, 1);
        assert_eq!(meta.byte_size, 42);
    }

    #[test]
    fn pdf_caps_processed_pages() {
        let meta = ExtractionMetadata::pdf(50, 30, 1024, false);
        assert_eq!(meta.total_pages, 50);
        assert_eq!(meta.pages_processed, 30);
    }

    #[test]
    fn pdf_below_cap_processes_all_pages() {
        let meta = ExtractionMetadata::pdf(3, 30, 1024, false);
        assert_eq!(meta.pages_processed, 3);
    }

    #[test]
    fn metadata_wire_names() {
        let meta = ExtractionMetadata::pdf(2, 30, 10, true);
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(json["type"], "pdf");
        assert_eq!(json["pages"], 2);
        assert_eq!(json["pages_processed"], 2);
        assert_eq!(json["size_bytes"], 10);
        assert_eq!(json["truncated"], true);
    }

    #[test]
    fn trimmed_char_count_ignores_padding() {
        let result = ExtractionResult {
            text: "  olá \n".to_string(),
            metadata: ExtractionMetadata::plain_text(7, false),
        };
        assert_eq!(result.trimmed_char_count(), 3);
    }
}
