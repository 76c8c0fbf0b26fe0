//! Prompt templates for the classification provider
//!
//! Localized text comes from [`LocaleProfile`]; nothing here branches on the
//! language directly.

use application::EmailContent;
use domain::LocaleProfile;

/// Organization described to the model when none is configured
pub const DEFAULT_ORGANIZATION_PROFILE: &str = "a large financial services institution";

/// Placeholder used when an email has no subject
const NO_SUBJECT: &str = "(none)";

/// System prompt for the classification call
#[must_use]
pub fn classification_system(organization: &str) -> String {
    format!(
        r#"You are an email classifier for {organization}.
Answer **only** in JSON, exactly in this format:
{{"category":"Productive|Unproductive","confidence":0.0-1.0}}

Goal: quickly separate what requires operational action or customer service (Productive) from what is irrelevant or needs no action (Unproductive).

Definitions:
- Productive: customer or partner requests, résumés, requests with a clear action, compliance or risk topics, deadlines, meetings, proposals or contracts, invoices or billing, technical support, incidents, onboarding or KYC, audits, regulatory reporting, security topics (fraud, phishing, chargeback, dispute), privacy requests (data access, correction or deletion).
- Unproductive: spam, chain letters, irrelevant promotions, mass mailings without context, social chat with no action, generic announcements, unsolicited newsletters, suspicious bait (no identification, odd attachments, shortened links) when there is no clear request.

PRODUCTIVE signals: a clear request, action or deadline; mentions an account, contract, transaction, ticket or ID; involves regulatory, compliance, legal, risk or security obligations.
UNPRODUCTIVE signals: generic promotion; greetings unrelated to business; vague requests; pure marketing; repetitive messages without a call to action.

Rules:
- Do not invent data. Classify using only the received content.
- Suspected fraud or phishing **without** a clear action is Unproductive (handled outside this flow).
- Confidence must reflect how clear the signals are (0.0 to 1.0).
- Do **not** include anything besides the requested JSON."#
    )
}

/// User message for the classification call
#[must_use]
pub fn classification_user(email: &EmailContent) -> String {
    format!(
        "Subject: {}\nContent:\n{}\n\nClassify and answer strictly in the JSON schema given.",
        email.subject().unwrap_or(NO_SUBJECT),
        email.body
    )
}

/// System prompt for the reply-drafting call
#[must_use]
pub fn draft_system(organization: &str, profile: &LocaleProfile) -> String {
    format!(
        r#"You write **short, objective and polite** replies to emails classified as Productive at {organization}.
Output **only** JSON, exactly in this format:
{{"suggested_reply":"<plain text email body without a subject line>"}}

General rules:
- **Always answer in {language}** (do not switch languages).
- Professional, cordial and direct tone; no unnecessary jargon.
- Do **not** share sensitive data. Ask only for the minimum (for example a ticket ID or the last 4 digits).
- Do **not** promise hard deadlines or guarantees; use best-effort language.
- If fraud or risk is suspected, point to a secure channel and avoid links or passwords.

FORMAT (plain text), **without a subject line**:
1) Greeting (for example "{greeting}")
2) Body in 1 to 3 objective sentences
3) Closing and signature:

{signature}"#,
        language = profile.display_name,
        greeting = profile.greeting,
        signature = profile.signature(),
    )
}

/// User message for the reply-drafting call
#[must_use]
pub fn draft_user(email: &EmailContent, profile: &LocaleProfile) -> String {
    format!(
        "REPLY LANGUAGE: {} ({}). Answer only in this language.\n\n\
         Original subject (context only, do NOT include it in the reply): {}\n\
         Received email content:\n{}\n\n\
         Write the email body (greeting, 1-3 objective sentences and signature), \
         WITHOUT a subject line. Return only JSON in the specified format.",
        profile.display_name,
        profile.tag,
        email.subject().unwrap_or(NO_SUBJECT),
        email.body
    )
}
