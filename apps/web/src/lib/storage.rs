//! Single owner of the browser's persisted key/value state.
//!
//! Multiple pages share résumé text, the session token, and the selected-job
//! context through local storage; routing every read and write through this
//! module keeps the key set closed (see `api_contract::storage_keys::ALL`)
//! and makes logout a one-call wipe. Storage failures (private browsing,
//! quota) degrade to "no value" rather than surfacing errors.

use api_contract::{storage_keys, OnboardingDraft};
use serde::{Deserialize, Serialize};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok()).flatten()
}

fn get(key: &str) -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(key).ok())
        .flatten()
        .filter(|value| !value.is_empty())
}

fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Removes every key the application ever persists. Called on logout.
pub fn clear_all() {
    for key in storage_keys::ALL {
        remove(key);
    }
}

pub fn token() -> Option<String> {
    get(storage_keys::TOKEN)
}

pub fn set_token(value: &str) {
    set(storage_keys::TOKEN, value);
}

pub fn logged_in_email() -> Option<String> {
    get(storage_keys::LOGGED_IN_USER)
}

pub fn set_logged_in_email(value: &str) {
    set(storage_keys::LOGGED_IN_USER, value);
}

pub fn full_name() -> Option<String> {
    get(storage_keys::USER_FULL_NAME)
}

pub fn set_full_name(value: &str) {
    set(storage_keys::USER_FULL_NAME, value);
}

pub fn resume_text() -> Option<String> {
    get(storage_keys::RESUME_TEXT)
}

pub fn set_resume_text(value: &str) {
    set(storage_keys::RESUME_TEXT, value);
}

pub fn tailored_resume_text() -> Option<String> {
    get(storage_keys::TAILORED_RESUME_TEXT)
}

/// Replaces the previous tailored result outright; tailoring never merges.
pub fn set_tailored_resume_text(value: &str) {
    set(storage_keys::TAILORED_RESUME_TEXT, value);
}

pub fn onboarding_draft() -> Option<OnboardingDraft> {
    get(storage_keys::ONBOARDING_DATA)
        .and_then(|json| serde_json::from_str(&json).ok())
}

pub fn set_onboarding_draft(draft: &OnboardingDraft) {
    if let Ok(json) = serde_json::to_string(draft) {
        set(storage_keys::ONBOARDING_DATA, &json);
    }
}

pub fn selected_job_url() -> Option<String> {
    get(storage_keys::SELECTED_JOB_URL)
}

pub fn set_selected_job_url(value: &str) {
    set(storage_keys::SELECTED_JOB_URL, value);
}

pub fn selected_job_jd() -> Option<String> {
    get(storage_keys::SELECTED_JOB_JD)
}

pub fn set_selected_job_jd(value: &str) {
    set(storage_keys::SELECTED_JOB_JD, value);
}

/// Working copy for the résumé editor page: text plus the export file name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EditorDraft {
    pub text: String,
    pub file_name: String,
}

pub fn editor_draft() -> Option<EditorDraft> {
    get(storage_keys::RESUME_EDITOR_DATA)
        .and_then(|json| serde_json::from_str(&json).ok())
}

pub fn set_editor_draft(draft: &EditorDraft) {
    if let Ok(json) = serde_json::to_string(draft) {
        set(storage_keys::RESUME_EDITOR_DATA, &json);
    }
}
