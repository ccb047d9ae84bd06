//! Client wrappers for the onboarding draft and suggestion endpoints.

use crate::app_lib::{get_json, post_json, AppError};
use api_contract::{OnboardingDraft, StatusResponse, SuggestKind, SuggestResponse};

/// Submits the completed wizard draft as a unit. Resubmission after a
/// failure sends the whole draft again; the backend treats each submission
/// as a fresh record, never a patch.
pub async fn submit(draft: &OnboardingDraft) -> Result<StatusResponse, AppError> {
    post_json("/onboarding", draft, "Onboarding submission failed").await
}

/// Fetches the last submitted draft to prefill the wizard on revisit. The
/// backend answers `{}` before the first submission, which decodes into the
/// default draft.
pub async fn fetch() -> Result<OnboardingDraft, AppError> {
    get_json("/onboarding", "Failed to load onboarding profile").await
}

/// Typeahead options for skills, roles, or cities. Tolerates missing auth;
/// an empty query returns the vocabulary head.
pub async fn suggest(kind: SuggestKind, query: &str) -> Result<Vec<String>, AppError> {
    let path = format!("/suggest/{}?q={}", kind.path_segment(), urlencode(query));
    let response: SuggestResponse = get_json(&path, "Suggestion lookup failed").await?;
    Ok(response.options)
}

/// Minimal percent-encoding for the single query parameter we send.
fn urlencode(value: &str) -> String {
    js_sys::encode_uri_component(value).as_string().unwrap_or_default()
}
