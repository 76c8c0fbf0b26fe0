//! Localized strings per language
//!
//! Every user-facing string that depends on the resolved language lives in
//! one immutable record per [`LanguageCode`].

use super::LanguageCode;

/// Immutable localization record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleProfile {
    /// Language this profile belongs to
    pub language: LanguageCode,
    /// Human-readable language name, used in prompts
    pub display_name: &'static str,
    /// BCP 47 tag
    pub tag: &'static str,
    /// Opening line of a reply
    pub greeting: &'static str,
    /// Closing line placed before the team signature
    pub closing: &'static str,
    /// Team name used to sign replies
    pub team_signature: &'static str,
    /// Fixed acknowledgment for unproductive mail
    pub canned_unproductive: &'static str,
    /// Sentence used when reply drafting is unavailable
    pub service_unavailable: &'static str,
}

const PORTUGUESE: LocaleProfile = LocaleProfile {
    language: LanguageCode::Pt,
    display_name: "Português do Brasil",
    tag: "pt-BR",
    greeting: "Olá,",
    closing: "Atenciosamente,",
    team_signature: "Equipe de Atendimento",
    canned_unproductive: "Obrigado pela mensagem! Registramos seu contato.",
    service_unavailable: "Nosso serviço de IA está temporariamente indisponível. Tente novamente mais tarde.",
};

const ENGLISH: LocaleProfile = LocaleProfile {
    language: LanguageCode::En,
    display_name: "English",
    tag: "en",
    greeting: "Hi,",
    closing: "Best regards,",
    team_signature: "Support Team",
    canned_unproductive: "Thanks for reaching out! We've recorded your message.",
    service_unavailable: "Our AI service is temporarily unavailable. Please try again later.",
};

impl LocaleProfile {
    /// Look up the profile for a language
    #[must_use]
    pub const fn for_language(language: LanguageCode) -> &'static Self {
        match language {
            LanguageCode::Pt => &PORTUGUESE,
            LanguageCode::En => &ENGLISH,
        }
    }

    /// Closing line and team name, separated by a newline
    #[must_use]
    pub fn signature(&self) -> String {
        format!("{}\n{}", self.closing, self.team_signature)
    }

    /// Signed reply stating that drafting is temporarily unavailable
    #[must_use]
    pub fn fallback_reply(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            self.greeting,
            self.service_unavailable,
            self.signature()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_has_closing_and_team() {
        let profile = LocaleProfile::for_language(LanguageCode::En);
        assert_eq!(profile.signature(), "Best regards,\nSupport Team");
    }

    #[test]
    fn portuguese_fallback_reply() {
        let reply = LocaleProfile::for_language(LanguageCode::Pt).fallback_reply();
        assert!(reply.starts_with("Olá,\n\n"));
        assert!(reply.contains("temporariamente indisponível"));
        assert!(reply.ends_with("Atenciosamente,\nEquipe de Atendimento"));
    }

    #[test]
    fn english_fallback_reply() {
        let reply = LocaleProfile::for_language(LanguageCode::En).fallback_reply();
        assert_eq!(
            reply,
            "Hi,\n\nOur AI service is temporarily unavailable. Please try again later.\n\nBest regards,\nSupport Team"
        );
    }

    #[test]
    fn canned_replies_differ_per_language() {
        let pt = LocaleProfile::for_language(LanguageCode::Pt).canned_unproductive;
        let en = LocaleProfile::for_language(LanguageCode::En).canned_unproductive;
        assert_ne!(pt, en);
    }
}
