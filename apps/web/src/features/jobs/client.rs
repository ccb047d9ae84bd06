//! Client wrappers for job search, detail, and one-click apply.

use crate::app_lib::{post_json, AppError};
use api_contract::{
    AutoApplyRequest, Job, JobDetailResponse, JobSearchRequest, JobsResponse, StatusResponse,
};

/// Runs the matched job search. Both wire shapes (bare array and a
/// `{"jobs": [...]}` wrapper) collapse to a plain list here.
pub async fn search(request: &JobSearchRequest) -> Result<Vec<Job>, AppError> {
    let response: JobsResponse = post_json("/jobs", request, "Failed to fetch jobs").await?;
    Ok(response.into_jobs())
}

/// Fetches a single job by its backend identifier. The résumé rides along
/// so the backend can score the job for this user.
pub async fn detail(job_id: &str, resume: &str) -> Result<Job, AppError> {
    let path = format!("/job/{job_id}");
    let body = serde_json::json!({ "resume": resume });
    let response: JobDetailResponse =
        post_json(&path, &body, "Failed to load job details").await?;
    Ok(response.into_job())
}

/// Asks the backend to apply on the user's behalf with the given résumé.
pub async fn auto_apply(request: &AutoApplyRequest) -> Result<StatusResponse, AppError> {
    post_json("/auto-apply", request, "Auto apply failed").await
}
