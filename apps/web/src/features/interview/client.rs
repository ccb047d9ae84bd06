//! Client wrappers for the mock interview loop.

use crate::app_lib::{post_json, AppError};
use api_contract::{EvaluateRequest, EvaluateResponse, InterviewStartRequest, InterviewStartResponse};

/// Starts a round and returns the first question, plus optional sample
/// answer and media URLs when the backend produced them.
pub async fn start(request: &InterviewStartRequest) -> Result<InterviewStartResponse, AppError> {
    post_json("/start-interview", request, "Failed to start interview").await
}

/// Submits the candidate's answer for feedback.
pub async fn evaluate(request: &EvaluateRequest) -> Result<EvaluateResponse, AppError> {
    post_json("/evaluate", request, "Answer evaluation failed").await
}
