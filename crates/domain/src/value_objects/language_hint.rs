//! Requested-language value object
//!
//! Clients send free-form language hints ("pt-BR", "en-US", "auto", ...).
//! The hint is sanitized into either an explicit language or the `Auto`
//! sentinel, which asks the resolver to decide.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::LanguageCode;

/// Language requested by the caller, before resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum LanguageHint {
    /// Let the resolver decide from headers and content
    #[default]
    Auto,
    /// Caller asked for a specific language
    Explicit(LanguageCode),
}

impl LanguageHint {
    /// Sanitize a raw hint
    ///
    /// - `pt`, `pt-br`, `pt_br` map to Portuguese
    /// - anything starting with `en` maps to English
    /// - `auto` (or an empty value) stays `Auto`
    /// - anything else falls back to Portuguese
    #[must_use]
    pub fn sanitize(raw: &str) -> Self {
        let code = raw.trim().to_lowercase();
        match code.as_str() {
            "" | "auto" => Self::Auto,
            "pt" | "pt-br" | "pt_br" => Self::Explicit(LanguageCode::Pt),
            c if c.starts_with("en") => Self::Explicit(LanguageCode::En),
            _ => Self::Explicit(LanguageCode::Pt),
        }
    }

    /// The explicit language, if one was requested
    #[must_use]
    pub const fn explicit(&self) -> Option<LanguageCode> {
        match self {
            Self::Auto => None,
            Self::Explicit(code) => Some(*code),
        }
    }

    /// Check whether the hint is the `Auto` sentinel
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl From<&str> for LanguageHint {
    fn from(raw: &str) -> Self {
        Self::sanitize(raw)
    }
}

impl From<String> for LanguageHint {
    fn from(raw: String) -> Self {
        Self::sanitize(&raw)
    }
}

impl From<Option<&str>> for LanguageHint {
    fn from(raw: Option<&str>) -> Self {
        raw.map_or(Self::Auto, Self::sanitize)
    }
}

impl From<Option<String>> for LanguageHint {
    fn from(raw: Option<String>) -> Self {
        Self::from(raw.as_deref())
    }
}

impl From<LanguageHint> for String {
    fn from(hint: LanguageHint) -> Self {
        hint.to_string()
    }
}

impl fmt::Display for LanguageHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Explicit(code) => write!(f, "{code}"),
        }
    }
}
