//! Language resolver
//!
//! Picks the reply language from an ordered list of rules. Each rule looks
//! at the request signals and either decides or abstains; the first decision
//! wins and Portuguese is the default when every rule abstains.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use domain::{LanguageCode, LanguageHint};

/// Marker words suggesting Portuguese content
const PORTUGUESE_MARKERS: &[&str] = &[
    "obrigado",
    "por favor",
    "fatura",
    "reunião",
    "prazo",
    "anexo",
    "protocolo",
];

/// Marker words suggesting English content
const ENGLISH_MARKERS: &[&str] = &[
    "thanks", "please", "invoice", "meeting", "deadline", "attached", "ticket",
];

/// Both marker sets in one automaton; pattern ids below
/// `PORTUGUESE_MARKERS.len()` are Portuguese
static MARKER_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    let patterns = PORTUGUESE_MARKERS.iter().chain(ENGLISH_MARKERS);
    #[allow(clippy::expect_used)] // Infallible with valid static patterns
    AhoCorasick::new(patterns).expect("Failed to build language marker matcher")
});

/// Everything the resolver may look at for one request
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageSignals<'a> {
    /// Sanitized language requested by the caller
    pub hint: LanguageHint,
    /// `X-User-Lang` header value
    pub user_lang: Option<&'a str>,
    /// `Accept-Language` header value
    pub accept_language: Option<&'a str>,
    /// Subject and body, or extracted document text
    pub text_sample: &'a str,
}

impl<'a> LanguageSignals<'a> {
    /// Signals carrying only a text sample
    #[must_use]
    pub fn from_text(text_sample: &'a str) -> Self {
        Self {
            text_sample,
            ..Self::default()
        }
    }

    /// Set the requested language
    #[must_use]
    pub const fn with_hint(mut self, hint: LanguageHint) -> Self {
        self.hint = hint;
        self
    }

    /// Set the `X-User-Lang` header value
    #[must_use]
    pub const fn with_user_lang(mut self, value: Option<&'a str>) -> Self {
        self.user_lang = value;
        self
    }

    /// Set the `Accept-Language` header value
    #[must_use]
    pub const fn with_accept_language(mut self, value: Option<&'a str>) -> Self {
        self.accept_language = value;
        self
    }

    /// Run the rule chain
    #[must_use]
    pub fn resolve(&self) -> LanguageCode {
        RULES
            .iter()
            .find_map(|rule| rule(self))
            .unwrap_or_default()
    }
}

type Rule = fn(&LanguageSignals<'_>) -> Option<LanguageCode>;

/// Rules in priority order
const RULES: [Rule; 4] = [
    explicit_hint,
    user_lang_header,
    accept_language_header,
    vocabulary_markers,
];

/// An explicit, non-`auto` request always wins
fn explicit_hint(signals: &LanguageSignals<'_>) -> Option<LanguageCode> {
    signals.hint.explicit()
}

fn user_lang_header(signals: &LanguageSignals<'_>) -> Option<LanguageCode> {
    signals.user_lang.and_then(language_from_header)
}

fn accept_language_header(signals: &LanguageSignals<'_>) -> Option<LanguageCode> {
    signals.accept_language.and_then(language_from_header)
}

/// Substring test, Portuguese checked first
fn language_from_header(value: &str) -> Option<LanguageCode> {
    let value = value.to_lowercase();
    if value.contains("pt") {
        Some(LanguageCode::Pt)
    } else if value.contains("en") {
        Some(LanguageCode::En)
    } else {
        None
    }
}

/// Decides only when markers of exactly one language are present
fn vocabulary_markers(signals: &LanguageSignals<'_>) -> Option<LanguageCode> {
    let text = signals.text_sample.to_lowercase();
    let (mut portuguese, mut english) = (false, false);

    for found in MARKER_MATCHER.find_overlapping_iter(&text) {
        if found.pattern().as_usize() < PORTUGUESE_MARKERS.len() {
            portuguese = true;
        } else {
            english = true;
        }
        if portuguese && english {
            return None;
        }
    }

    match (portuguese, english) {
        (true, false) => Some(LanguageCode::Pt),
        (false, true) => Some(LanguageCode::En),
        _ => None,
    }
}

/// Resolve the language for a request
///
/// `requested` is the raw hint sent by the caller. Total and pure: always
/// returns either Portuguese or English.
///
/// # Examples
///
/// ```
/// use application::resolve_language;
/// use domain::LanguageCode;
///
/// let lang = resolve_language("auto", "Thanks for the invoice", None, None);
/// assert_eq!(lang, LanguageCode::En);
///
/// let lang = resolve_language("auto", "Thanks", Some("pt-BR,pt;q=0.9"), None);
/// assert_eq!(lang, LanguageCode::Pt);
/// ```
#[must_use]
pub fn resolve_language(
    requested: &str,
    text_sample: &str,
    accept_language: Option<&str>,
    user_lang: Option<&str>,
) -> LanguageCode {
    LanguageSignals::from_text(text_sample)
        .with_hint(LanguageHint::sanitize(requested))
        .with_user_lang(user_lang)
        .with_accept_language(accept_language)
        .resolve()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PT_BODY: &str = "Obrigado, por favor veja o anexo da fatura antes do prazo";
    const EN_BODY: &str = "Thanks, please see the attached invoice before the deadline";

    #[test]
    fn explicit_hint_beats_markers() {
        assert_eq!(resolve_language("en", PT_BODY, None, None), LanguageCode::En);
        assert_eq!(resolve_language("pt", EN_BODY, None, None), LanguageCode::Pt);
    }

    #[test]
    fn explicit_hint_beats_headers() {
        assert_eq!(
            resolve_language("en-US", "", Some("pt-BR"), Some("pt")),
            LanguageCode::En
        );
    }

    #[test]
    fn unknown_hint_means_portuguese() {
        assert_eq!(resolve_language("fr", EN_BODY, None, None), LanguageCode::Pt);
    }

    #[test]
    fn english_markers_resolve_english() {
        assert_eq!(resolve_language("auto", EN_BODY, None, None), LanguageCode::En);
    }

    #[test]
    fn portuguese_markers_resolve_portuguese() {
        assert_eq!(resolve_language("auto", PT_BODY, None, None), LanguageCode::Pt);
    }

    #[test]
    fn no_markers_default_to_portuguese() {
        assert_eq!(
            resolve_language("auto", "Hello world, quick note", None, None),
            LanguageCode::Pt
        );
        assert_eq!(resolve_language("auto", "", None, None), LanguageCode::Pt);
    }

    #[test]
    fn mixed_markers_default_to_portuguese() {
        assert_eq!(
            resolve_language("auto", "Thanks! Segue o anexo.", None, None),
            LanguageCode::Pt
        );
    }

    #[test]
    fn markers_are_case_insensitive() {
        assert_eq!(
            resolve_language("auto", "PLEASE REVIEW THE MEETING NOTES", None, None),
            LanguageCode::En
        );
        assert_eq!(
            resolve_language("auto", "REUNIÃO amanhã", None, None),
            LanguageCode::Pt
        );
    }

    #[test]
    fn user_lang_beats_accept_language() {
        assert_eq!(
            resolve_language("auto", PT_BODY, Some("pt-BR"), Some("en")),
            LanguageCode::En
        );
    }

    #[test]
    fn accept_language_beats_markers() {
        assert_eq!(
            resolve_language("auto", PT_BODY, Some("en-US,en;q=0.9"), None),
            LanguageCode::En
        );
    }

    #[test]
    fn header_checks_portuguese_first() {
        assert_eq!(
            resolve_language("auto", EN_BODY, Some("en-US,pt;q=0.5"), None),
            LanguageCode::Pt
        );
    }

    #[test]
    fn header_without_known_language_falls_through() {
        assert_eq!(
            resolve_language("auto", EN_BODY, Some("fr-FR"), Some("de")),
            LanguageCode::En
        );
    }

    #[test]
    fn header_match_is_case_insensitive() {
        assert_eq!(resolve_language("auto", "", None, Some("EN")), LanguageCode::En);
    }

    #[test]
    fn empty_hint_behaves_like_auto() {
        assert_eq!(resolve_language("", EN_BODY, None, None), LanguageCode::En);
    }

    #[test]
    fn rules_abstain_independently() {
        let signals = LanguageSignals::from_text("nothing here");
        assert_eq!(explicit_hint(&signals), None);
        assert_eq!(user_lang_header(&signals), None);
        assert_eq!(accept_language_header(&signals), None);
        assert_eq!(vocabulary_markers(&signals), None);
    }

    #[test]
    fn resolution_is_deterministic() {
        let first = resolve_language("auto", EN_BODY, None, None);
        let second = resolve_language("auto", EN_BODY, None, None);
        assert_eq!(first, second);
    }
}
