//! Client wrapper for cover letter generation.

use crate::app_lib::{post_json, AppError};
use api_contract::{CoverLetterRequest, CoverLetterResponse};

pub async fn generate(request: &CoverLetterRequest) -> Result<CoverLetterResponse, AppError> {
    post_json("/generate-cover-letter", request, "Cover letter generation failed").await
}
