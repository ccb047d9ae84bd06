//! Client wrappers for résumé upload, tailoring, scoring, and export.

use crate::app_lib::{post_binary, post_json, post_multipart, AppError};
use api_contract::{
    DownloadRequest, MatchRequest, MatchResult, TailorRequest, TailorResult, UploadResponse,
};
use web_sys::FormData;

/// Uploads a résumé file and returns the extracted plain text. The backend
/// owns PDF parsing; the client only ships the bytes.
pub async fn upload(file: &web_sys::File) -> Result<UploadResponse, AppError> {
    let form = FormData::new()
        .map_err(|_| AppError::Serialization("Failed to build form data.".to_string()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| AppError::Serialization("Failed to attach resume file.".to_string()))?;
    post_multipart("/upload-resume", form, "Resume upload failed").await
}

/// Tailors the résumé toward a job description, returning the rewritten
/// text and before/after match scores.
pub async fn tailor(request: &TailorRequest) -> Result<TailorResult, AppError> {
    request.validate().map_err(validation)?;
    post_json("/tailor-resume", request, "Resume tailoring failed").await
}

/// Scores a résumé against a job description without rewriting it.
pub async fn match_score(request: &MatchRequest) -> Result<MatchResult, AppError> {
    request.validate().map_err(validation)?;
    post_json("/match", request, "Match scoring failed").await
}

/// Renders the résumé text into a document and returns the raw bytes.
pub async fn download(request: &DownloadRequest) -> Result<Vec<u8>, AppError> {
    request.validate().map_err(validation)?;
    post_binary("/download-resume", request, "Resume download failed").await
}

fn validation(err: api_contract::Error) -> AppError {
    AppError::Validation(err.to_string())
}
