//! End-to-end checks of the client/backend contract against stubbed backend
//! responses, exercised as serialized JSON exactly as it crosses the wire.

use api_contract::{
    detail_or, storage_keys, AuthResponse, JobsResponse, OnboardingDraft, Session, TailorResult,
    TailorState,
};

/// A stub backend that echoes whatever draft was last submitted, the way the
/// session-backed `/onboarding` endpoint does.
struct EchoBackend {
    stored: Option<String>,
}

impl EchoBackend {
    fn submit(&mut self, draft: &OnboardingDraft) {
        self.stored = Some(serde_json::to_string(draft).expect("encode draft"));
    }

    fn fetch(&self) -> OnboardingDraft {
        let body = self.stored.as_deref().unwrap_or("{}");
        serde_json::from_str(body).expect("decode draft")
    }
}

#[test]
fn onboarding_submit_then_fetch_round_trips_field_for_field() {
    let draft = OnboardingDraft {
        first_step_selections: vec!["Practice Interviews".to_string()],
        education_status: "Post Graduation".to_string(),
        field_of_study: "Business".to_string(),
        skills: vec!["Product Design".to_string()],
        resume_file_name: None,
        preferred_roles: vec!["Product Designer".to_string()],
        employment_types: vec!["Onsite".to_string()],
        preferred_cities: vec!["New York".to_string()],
    };

    let mut backend = EchoBackend { stored: None };
    assert_eq!(backend.fetch(), OnboardingDraft::default(), "pre-submit fetch is empty");

    backend.submit(&draft);
    assert_eq!(backend.fetch(), draft);
}

#[test]
fn tailoring_scenario_updates_displayed_percentages() {
    // Stubbed /tailor-resume response.
    let body = r#"{
        "tailored_resume": "Python backend engineer with 5 years experience",
        "original_match": 60,
        "tailored_match": 85
    }"#;
    let result: TailorResult = serde_json::from_str(body).expect("decode");

    let mut state = TailorState::default();
    state.apply(&result);
    assert_eq!(state.original_match, Some(60.0));
    assert_eq!(state.tailored_match, Some(85.0));

    // Repeating the identical call leaves local state unchanged.
    let snapshot = state.clone();
    state.apply(&result);
    state.apply(&result);
    assert_eq!(state, snapshot);
}

#[test]
fn non_2xx_error_message_is_detail_else_fallback() {
    assert_eq!(
        detail_or(r#"{"detail": "Invalid credentials"}"#, "Login failed"),
        "Invalid credentials"
    );
    assert_eq!(detail_or("Internal Server Error", "Login failed"), "Login failed");
}

#[test]
fn login_token_persists_and_tokenless_signup_leaves_it_alone() {
    let mut session = Session::default();

    let signup: AuthResponse =
        serde_json::from_str(r#"{"message": "Signup successful"}"#).expect("decode");
    session.absorb("ada@example.com", &signup);
    assert!(!session.is_authenticated());

    let login: AuthResponse =
        serde_json::from_str(r#"{"token": "session-ada@example.com", "full_name": "Ada"}"#)
            .expect("decode");
    session.absorb("ada@example.com", &login);
    assert_eq!(session.token.as_deref(), Some("session-ada@example.com"));

    // Logout clears every persisted key; the constant is the contract.
    assert_eq!(storage_keys::ALL.len(), 9);
    assert!(storage_keys::ALL.contains(&"tailoredResumeText"));
}

#[test]
fn job_search_accepts_both_historical_response_shapes() {
    let job = r#"{"id": "1", "title": "SWE", "company": "Acme", "match_score": 91}"#;
    for body in [format!("[{job}]"), format!(r#"{{"jobs": [{job}]}}"#)] {
        let response: JobsResponse = serde_json::from_str(&body).expect("decode");
        let jobs = response.into_jobs();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].match_score, Some(91.0));
    }
}
