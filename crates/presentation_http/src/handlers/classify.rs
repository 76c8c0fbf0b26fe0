//! Email classification handler

use axum::{Json, extract::State, http::HeaderMap};
use domain::{
    Category, ClassificationRequest, ClassificationResponse, ExtractionMetadata, LanguageCode,
};
use serde::Serialize;
use tracing::instrument;

use super::language_headers;
use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Body returned by `/classify` and `/classify-file`
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub category: Category,
    pub confidence: f64,
    pub suggested_reply: String,
    pub language: LanguageCode,
    /// Normalized tokens, debug mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

/// Extra information attached to a classification
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResponseMeta {
    /// Uploaded file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(flatten)]
    pub extraction: Option<ExtractionMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,
}

impl ClassifyResponse {
    /// Shape a response; `meta` is only present when there is something to
    /// report
    pub fn from_response(response: ClassificationResponse, mut meta: ResponseMeta) -> Self {
        let tokens = response.diagnostics.map(|diagnostics| {
            meta.token_count = Some(diagnostics.token_count);
            meta.language = Some(response.language);
            diagnostics.tokens
        });
        let has_meta =
            meta.file.is_some() || meta.extraction.is_some() || meta.token_count.is_some();

        Self {
            category: response.category,
            confidence: response.confidence,
            suggested_reply: response.suggested_reply,
            language: response.language,
            tokens,
            meta: has_meta.then_some(meta),
        }
    }
}

/// Classify an email and suggest a reply
#[instrument(skip(state, headers, request), fields(body_len = request.body.len()))]
pub async fn classify(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<ClassificationRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let response = state
        .classification_service
        .classify_email(&request, &language_headers(&headers))
        .await?;

    Ok(Json(ClassifyResponse::from_response(
        response,
        ResponseMeta::default(),
    )))
}
