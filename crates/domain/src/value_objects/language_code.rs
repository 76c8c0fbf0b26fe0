//! Resolved language value object

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::LocaleProfile;
use crate::errors::DomainError;

/// Final language of a classification request
///
/// Once resolved, a request is always either Portuguese or English.
/// Portuguese is the default whenever no signal points elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// Brazilian Portuguese
    #[default]
    Pt,
    /// English
    En,
}

impl LanguageCode {
    /// Short wire code ("pt" / "en")
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    /// Localized strings for this language
    #[must_use]
    pub const fn profile(&self) -> &'static LocaleProfile {
        LocaleProfile::for_language(*self)
    }

    /// All supported languages
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Pt, Self::En]
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = DomainError;

    /// Strict parsing: only "pt" and "en" are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" => Ok(Self::Pt),
            "en" => Ok(Self::En),
            other => Err(DomainError::InvalidLanguage(other.to_string())),
        }
    }
}
