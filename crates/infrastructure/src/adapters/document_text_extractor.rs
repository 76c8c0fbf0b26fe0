//! Document text extractor
//!
//! Decodes plain-text uploads and pulls text out of PDFs, enforcing the page
//! and character caps. PDF parsing runs on the blocking pool.

use application::{ExtractionError, TextExtractorPort};
use async_trait::async_trait;
use domain::{ExtractionMetadata, ExtractionResult, SourceKind};
use lopdf::Document;
use tracing::{debug, instrument, warn};

/// Marker appended to text cut at the character cap
pub const TRUNCATION_MARKER: &str = "\n[...]";

const PLAIN_TEXT_EXTENSIONS: &[&str] = &[".txt", ".text", ".md", ".log"];
const PDF_EXTENSIONS: &[&str] = &[".pdf"];

/// Caps applied during extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionLimits {
    /// PDF pages read at most
    pub pdf_max_pages: u32,
    /// Characters kept at most, before the truncation marker
    pub text_max_chars: usize,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self {
            pdf_max_pages: 30,
            text_max_chars: 12000,
        }
    }
}

/// Extractor for `.txt`-like and `.pdf` uploads
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTextExtractor {
    limits: ExtractionLimits,
}

impl DocumentTextExtractor {
    /// Create an extractor with the given caps
    #[must_use]
    pub const fn new(limits: ExtractionLimits) -> Self {
        Self { limits }
    }

    /// Caps in effect
    #[must_use]
    pub const fn limits(&self) -> ExtractionLimits {
        self.limits
    }
}

/// Pick the decoder from the file name, ignoring case
fn detect_kind(filename: &str) -> Option<SourceKind> {
    let name = filename.trim().to_lowercase();
    if PLAIN_TEXT_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
        Some(SourceKind::Txt)
    } else if PDF_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
        Some(SourceKind::Pdf)
    } else {
        None
    }
}

/// Decode bytes as UTF-8, falling back to Windows-1252
///
/// A UTF-8 byte-order mark is removed. Nothing undecodable is fatal.
fn decode_text(blob: &[u8]) -> String {
    let (text, _, had_errors) = encoding_rs::UTF_8.decode(blob);
    if !had_errors {
        return text.into_owned();
    }
    debug!("Text is not valid UTF-8, decoding as Windows-1252");
    let (text, _, _) = encoding_rs::WINDOWS_1252.decode(blob);
    text.chars().filter(|c| *c != char::REPLACEMENT_CHARACTER).collect()
}

/// Cut at `max_chars` characters and append the marker
fn truncate(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => (format!("{}{TRUNCATION_MARKER}", &text[..cut]), true),
        None => (text.to_string(), false),
    }
}

fn extract_plain_text(blob: &[u8], limits: ExtractionLimits) -> ExtractionResult {
    // Leading padding counts toward the cap; trimming happens after the cut
    let (text, truncated) = truncate(&decode_text(blob), limits.text_max_chars);
    ExtractionResult {
        text: text.trim().to_string(),
        metadata: ExtractionMetadata::plain_text(blob.len(), truncated),
    }
}

fn extract_pdf(blob: &[u8], limits: ExtractionLimits) -> Result<ExtractionResult, ExtractionError> {
    let document =
        Document::load_mem(blob).map_err(|e| ExtractionError::CorruptDocument(e.to_string()))?;
    if document.is_encrypted() {
        return Err(ExtractionError::CorruptDocument(
            "document is encrypted".to_string(),
        ));
    }

    let pages = document.get_pages();
    if pages.is_empty() {
        return Err(ExtractionError::CorruptDocument(
            "document has no pages".to_string(),
        ));
    }
    let total_pages = u32::try_from(pages.len()).unwrap_or(u32::MAX);

    let parts: Vec<String> = pages
        .keys()
        .take(usize::try_from(limits.pdf_max_pages).unwrap_or(usize::MAX))
        .filter_map(|&page| match document.extract_text(&[page]) {
            Ok(text) => Some(text.trim().to_string()),
            Err(e) => {
                debug!(page, error = %e, "Page has no extractable text");
                None
            },
        })
        .filter(|text| !text.is_empty())
        .collect();

    let (text, truncated) = truncate(parts.join("\n\n").trim(), limits.text_max_chars);
    Ok(ExtractionResult {
        text,
        metadata: ExtractionMetadata::pdf(total_pages, limits.pdf_max_pages, blob.len(), truncated),
    })
}

#[async_trait]
impl TextExtractorPort for DocumentTextExtractor {
    #[instrument(skip(self, blob), fields(size_bytes = blob.len()))]
    async fn extract(
        &self,
        blob: &[u8],
        filename: &str,
    ) -> Result<ExtractionResult, ExtractionError> {
        match detect_kind(filename) {
            Some(SourceKind::Txt) => Ok(extract_plain_text(blob, self.limits)),
            Some(SourceKind::Pdf) => {
                let owned = blob.to_vec();
                let limits = self.limits;
                tokio::task::spawn_blocking(move || extract_pdf(&owned, limits))
                    .await
                    .unwrap_or_else(|e| {
                        warn!(error = %e, "PDF parser aborted");
                        Err(ExtractionError::CorruptDocument(
                            "PDF parser aborted".to_string(),
                        ))
                    })
            },
            None => Err(ExtractionError::UnsupportedFormat(filename.to_string())),
        }
    }
}
