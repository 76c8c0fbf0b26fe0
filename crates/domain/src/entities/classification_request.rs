//! Inbound email to classify

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{errors::DomainError, value_objects::LanguageHint};

/// An email submitted for classification
///
/// # Examples
///
/// ```
/// use domain::{ClassificationRequest, LanguageHint};
///
/// let request = ClassificationRequest::new("Please send the invoice")
///     .with_subject("Invoice")
///     .with_language("en");
/// assert!(request.ensure_valid().is_ok());
/// assert!(!request.language_hint.is_auto());
///
/// assert!(ClassificationRequest::new("   ").ensure_valid().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ClassificationRequest {
    /// Subject line
    #[serde(default)]
    pub subject: Option<String>,
    /// Message body, required and non-blank
    #[validate(custom(function = "validate_not_blank"))]
    pub body: String,
    /// Sender address, informational only
    #[serde(default)]
    pub sender: Option<String>,
    /// Recipient addresses in the order given
    #[serde(default)]
    pub recipients: Option<Vec<String>>,
    /// Requested language, `auto` unless specified
    #[serde(default, rename = "language")]
    pub language_hint: LanguageHint,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("body is required")));
    }
    Ok(())
}

impl ClassificationRequest {
    /// Create a request with only a body
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            subject: None,
            body: body.into(),
            sender: None,
            recipients: None,
            language_hint: LanguageHint::Auto,
        }
    }

    /// Set the subject line
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the sender
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Set the recipients
    #[must_use]
    pub fn with_recipients(mut self, recipients: Vec<String>) -> Self {
        self.recipients = Some(recipients);
        self
    }

    /// Set the language hint from a free-form value
    #[must_use]
    pub fn with_language(mut self, hint: &str) -> Self {
        self.language_hint = LanguageHint::sanitize(hint);
        self
    }

    /// Check the request invariants
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|_| DomainError::validation("body is required"))
    }

    /// Subject and body joined, used as the language-detection sample
    #[must_use]
    pub fn text_sample(&self) -> String {
        format!("{}\n{}", self.subject.as_deref().unwrap_or_default(), self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::LanguageCode;

    #[test]
    fn blank_body_is_invalid() {
        for body in ["", " ", "\n\t  "] {
            let err = ClassificationRequest::new(body).ensure_valid().unwrap_err();
            assert!(matches!(err, DomainError::ValidationError(_)));
        }
    }

    #[test]
    fn non_blank_body_is_valid() {
        assert!(ClassificationRequest::new("  hello  ").ensure_valid().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let request = ClassificationRequest::new("body")
            .with_subject("subject")
            .with_sender("a@example.com")
            .with_recipients(vec!["b@example.com".to_string(), "c@example.com".to_string()])
            .with_language("pt-BR");

        assert_eq!(request.subject.as_deref(), Some("subject"));
        assert_eq!(request.sender.as_deref(), Some("a@example.com"));
        assert_eq!(request.recipients.as_ref().map(Vec::len), Some(2));
        assert_eq!(request.language_hint.explicit(), Some(LanguageCode::Pt));
    }

    #[test]
    fn text_sample_joins_subject_and_body() {
        let request = ClassificationRequest::new("body").with_subject("subject");
        assert_eq!(request.text_sample(), "subject\nbody");
        assert_eq!(ClassificationRequest::new("body").text_sample(), "\nbody");
    }

    #[test]
    fn deserializes_minimal_json() {
        let request: ClassificationRequest = serde_json::from_str(r#"{"body": "hi"}"#).unwrap();
        assert_eq!(request.body, "hi");
        assert!(request.language_hint.is_auto());
        assert!(request.subject.is_none());
    }

    #[test]
    fn null_language_means_auto() {
        let request: ClassificationRequest =
            serde_json::from_str(r#"{"body": "hi", "language": null}"#).unwrap();
        assert!(request.language_hint.is_auto());
    }

    #[test]
    fn deserializes_full_json() {
        let json = r#"{
            "subject": "Meeting",
            "body": "See you",
            "sender": "a@example.com",
            "recipients": ["b@example.com"],
            "language": "en"
        }"#;
        let request: ClassificationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.language_hint.explicit(), Some(LanguageCode::En));
        assert_eq!(request.recipients, Some(vec!["b@example.com".to_string()]));
    }

    #[test]
    fn missing_body_fails_deserialization() {
        let result: Result<ClassificationRequest, _> = serde_json::from_str(r#"{"subject": "x"}"#);
        assert!(result.is_err());
    }
}
