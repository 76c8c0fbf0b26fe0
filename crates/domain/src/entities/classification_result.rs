//! Category and confidence of a classification

use serde::{Deserialize, Serialize};

use crate::value_objects::Category;

/// Outcome of classifying one email
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    /// Always within `[0.0, 1.0]`
    pub confidence: f64,
}

impl ClassificationResult {
    /// Create a result, clamping confidence into `[0.0, 1.0]`
    ///
    /// A NaN confidence is treated as no confidence at all.
    #[must_use]
    pub fn new(category: Category, confidence: f64) -> Self {
        Self {
            category,
            confidence: clamp_confidence(confidence),
        }
    }

    /// Build a result from an unvalidated provider label
    ///
    /// Unknown labels are coerced to [`Category::Productive`].
    #[must_use]
    pub fn from_label(label: &str, confidence: f64) -> Self {
        Self::new(Category::from_label(label), confidence)
    }
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
