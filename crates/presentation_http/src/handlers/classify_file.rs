//! Document classification handler

use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, State, multipart::MultipartRejection},
    http::HeaderMap,
};
use domain::LanguageHint;
use tracing::{debug, instrument};

use super::{
    classify::{ClassifyResponse, ResponseMeta},
    language_headers,
};
use crate::{error::ApiError, state::AppState};

/// Multipart field holding the uploaded document
pub const FILE_FIELD: &str = "file";
/// Multipart field holding the optional language hint
pub const LANGUAGE_FIELD: &str = "language";

/// File part of a multipart upload
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Fields read from a classification upload
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub language: LanguageHint,
}

impl UploadForm {
    /// Drain a multipart stream, ignoring unknown fields
    ///
    /// A part without a file name is stored under an empty name, which the
    /// extractor rejects as an unsupported format.
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(FILE_FIELD) => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    form.file = Some(UploadedFile { file_name, bytes });
                },
                Some(LANGUAGE_FIELD) => {
                    form.language = LanguageHint::sanitize(&field.text().await?);
                },
                _ => {},
            }
        }
        Ok(form)
    }

    /// The uploaded file, or 400 when the field is missing
    pub fn require_file(self) -> Result<(UploadedFile, LanguageHint), ApiError> {
        let language = self.language;
        self.file
            .map(|file| (file, language))
            .ok_or_else(|| ApiError::BadRequest(format!("missing '{FILE_FIELD}' field")))
    }
}

/// Classify an uploaded `.txt` or `.pdf` document
#[instrument(skip_all)]
pub async fn classify_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let (file, hint) = UploadForm::read(multipart?).await?.require_file()?;
    debug!(size_bytes = file.bytes.len(), "Received document");

    let classified = state
        .classification_service
        .classify_document(&file.bytes, &file.file_name, hint, &language_headers(&headers))
        .await?;

    let meta = ResponseMeta {
        file: Some(classified.file_name),
        extraction: Some(classified.extraction),
        ..ResponseMeta::default()
    };
    Ok(Json(ClassifyResponse::from_response(
        classified.response,
        meta,
    )))
}
