//! Text normalizer
//!
//! Lowercases, strips diacritics, drops punctuation and digits, then splits
//! into tokens with short words and stop-words removed. Used for diagnostics.

use domain::LanguageCode;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Portuguese stop-words
///
/// Accented entries never match: tokens are compared after diacritics are
/// stripped, so `nao` and `voce` survive normalization.
const STOP_WORDS_PT: &[&str] = &[
    "a", "ao", "aos", "com", "como", "da", "de", "do", "dos", "e", "ela", "ele", "em", "isso",
    "já", "mas", "me", "no", "nos", "não", "o", "os", "ou", "para", "por", "que", "se", "sem",
    "sua", "são", "também", "um", "uma", "você",
];

/// English stop-words
const STOP_WORDS_EN: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "else", "for", "to", "of", "in", "on",
    "at", "by", "is", "are", "was", "were", "be", "been", "being", "it", "as", "with", "that",
    "this", "these", "those", "from", "i", "you", "he", "she", "we", "they",
];

/// Tokens of this many characters or fewer are dropped
const MIN_TOKEN_CHARS: usize = 2;

/// Whether `token` belongs to either stop-word list
#[must_use]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS_PT.contains(&token) || STOP_WORDS_EN.contains(&token)
}

/// Lowercase `text` and remove combining marks after canonical decomposition
#[must_use]
pub fn strip_diacritics(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Tokenize `text` for diagnostics
///
/// Stop-words of both languages are always removed, since inbound mail
/// routinely mixes them; `_language` is accepted for interface stability.
/// Order and duplicates are preserved. Empty input yields no tokens.
#[must_use]
pub fn normalize(text: &str, _language: LanguageCode) -> Vec<String> {
    let cleaned: String = strip_diacritics(text)
        .chars()
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .filter(|token| !is_stop_word(token))
        .map(str::to_owned)
        .collect()
}
