//! Client-side session model and the canonical persisted-state key list.
//!
//! The browser's local storage is the integration bus between pages; every
//! key the app ever writes is enumerated here so logout can clear the lot and
//! no page can invent an unlisted key.

use crate::auth::AuthResponse;

/// Local-storage key names. These are a wire format of sorts: they must match
/// the deployed app byte for byte or returning users lose their state.
pub mod storage_keys {
    pub const TOKEN: &str = "token";
    pub const LOGGED_IN_USER: &str = "loggedInUser";
    pub const USER_FULL_NAME: &str = "userFullName";
    pub const RESUME_TEXT: &str = "resumeText";
    pub const TAILORED_RESUME_TEXT: &str = "tailoredResumeText";
    pub const ONBOARDING_DATA: &str = "onboardingData";
    pub const RESUME_EDITOR_DATA: &str = "resumeEditorData";
    pub const SELECTED_JOB_URL: &str = "selectedJobURL";
    pub const SELECTED_JOB_JD: &str = "selectedJobJD";

    /// Every key the application persists. Logout removes each of these.
    pub const ALL: [&str; 9] = [
        TOKEN,
        LOGGED_IN_USER,
        USER_FULL_NAME,
        RESUME_TEXT,
        TAILORED_RESUME_TEXT,
        ONBOARDING_DATA,
        RESUME_EDITOR_DATA,
        SELECTED_JOB_URL,
        SELECTED_JOB_JD,
    ];
}

/// In-memory view of the authenticated session. At most one per browser
/// profile; destroyed wholesale on logout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub logged_in_email: Option<String>,
    pub full_name: Option<String>,
}

impl Session {
    /// Folds an auth response into the session. A response carrying a token
    /// replaces the stored one; a token-less response leaves the previous
    /// token in place (the backend may answer signup without opening a
    /// session yet).
    pub fn absorb(&mut self, email: &str, response: &AuthResponse) {
        if let Some(token) = &response.token {
            self.token = Some(token.clone());
        }
        if let Some(full_name) = &response.full_name {
            self.full_name = Some(full_name.clone());
        }
        self.logged_in_email = Some(email.to_string());
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_list_is_exactly_the_nine_persisted_keys() {
        assert_eq!(
            storage_keys::ALL,
            [
                "token",
                "loggedInUser",
                "userFullName",
                "resumeText",
                "tailoredResumeText",
                "onboardingData",
                "resumeEditorData",
                "selectedJobURL",
                "selectedJobJD",
            ]
        );
    }

    #[test]
    fn token_response_replaces_token() {
        let mut session = Session::default();
        session.absorb(
            "ada@example.com",
            &AuthResponse {
                token: Some("session-ada@example.com".to_string()),
                full_name: Some("Ada Lovelace".to_string()),
                message: None,
            },
        );
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("session-ada@example.com"));
        assert_eq!(session.logged_in_email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn tokenless_response_keeps_prior_token() {
        let mut session = Session {
            token: Some("session-old".to_string()),
            logged_in_email: Some("ada@example.com".to_string()),
            full_name: None,
        };
        session.absorb(
            "ada@example.com",
            &AuthResponse {
                token: None,
                full_name: None,
                message: Some("Signup successful".to_string()),
            },
        );
        assert_eq!(session.token.as_deref(), Some("session-old"));
    }
}
