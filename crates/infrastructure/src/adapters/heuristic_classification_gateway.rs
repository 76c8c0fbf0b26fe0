//! Heuristic classification gateway
//!
//! Offline stand-in used when no provider credentials are configured.
//! Promotional vocabulary marks an email as unproductive; everything else is
//! productive. Replies are always the localized fallback.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use application::{ClassificationGateway, EmailContent, GatewayVerdict};
use async_trait::async_trait;
use domain::{Category, LanguageCode, LocaleProfile};
use tracing::debug;

/// Words marking promotional or social mail
const UNPRODUCTIVE_MARKERS: &[&str] = &["feliz", "oferta", "promo", "desconto", "sorteio"];

/// Fixed score reported by the heuristic
pub const HEURISTIC_CONFIDENCE: f64 = 0.55;

static UNPRODUCTIVE_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with valid static patterns
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(UNPRODUCTIVE_MARKERS)
        .expect("Failed to build unproductive marker matcher")
});

/// Gateway deciding by marker words, with no network access
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassificationGateway;

impl HeuristicClassificationGateway {
    /// Create a new heuristic gateway
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClassificationGateway for HeuristicClassificationGateway {
    async fn classify(&self, email: &EmailContent, _language: LanguageCode) -> GatewayVerdict {
        let promotional = email
            .subject
            .as_deref()
            .is_some_and(|subject| UNPRODUCTIVE_MATCHER.is_match(subject))
            || UNPRODUCTIVE_MATCHER.is_match(&email.body);

        let category = if promotional {
            Category::Unproductive
        } else {
            Category::Productive
        };
        debug!(%category, "Heuristic classification");

        GatewayVerdict::new(category.as_str(), HEURISTIC_CONFIDENCE)
    }

    async fn draft_reply(&self, _email: &EmailContent, language: LanguageCode) -> String {
        LocaleProfile::for_language(language).fallback_reply()
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
