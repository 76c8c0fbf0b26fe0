//! Upload echo handler, kept for older front-ends

use axum::{
    Json,
    extract::{Multipart, multipart::MultipartRejection},
};
use serde::Serialize;
use tracing::instrument;

use super::classify_file::UploadForm;
use crate::error::ApiError;

/// Upload echo response
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub size: usize,
}

/// Echo the name and size of an uploaded file
#[instrument(skip_all)]
pub async fn upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let (file, _) = UploadForm::read(multipart?).await?.require_file()?;
    Ok(Json(UploadResponse {
        filename: file.file_name,
        size: file.bytes.len(),
    }))
}
