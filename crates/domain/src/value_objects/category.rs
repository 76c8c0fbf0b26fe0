//! Email category value object

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Triage category of an email
///
/// Productive mail needs an operational action or a reply; unproductive
/// mail needs nothing. `Productive` is the conservative default: any label
/// that cannot be understood is treated as actionable rather than dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Requires action or a reply
    #[default]
    #[serde(alias = "Produtivo")]
    Productive,
    /// No action needed
    #[serde(alias = "Improdutivo")]
    Unproductive,
}

impl Category {
    /// Canonical label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Productive => "Productive",
            Self::Unproductive => "Unproductive",
        }
    }

    /// Lenient conversion from a provider label
    ///
    /// English and Portuguese labels are accepted case-insensitively;
    /// every other value is coerced to [`Category::Productive`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    /// Check whether this category asks for a drafted reply
    #[must_use]
    pub const fn needs_reply(&self) -> bool {
        matches!(self, Self::Productive)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "productive" | "produtivo" => Ok(Self::Productive),
            "unproductive" | "improdutivo" => Ok(Self::Unproductive),
            other => Err(DomainError::InvalidCategory(other.to_string())),
        }
    }
}
