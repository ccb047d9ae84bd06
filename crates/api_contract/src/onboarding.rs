//! Onboarding draft payload and the typeahead suggestion contract.

use serde::{Deserialize, Serialize};

/// Employment type vocabulary. These strings are wire values: they are
/// stored in the draft's `employmentTypes` and echoed into the `/jobs`
/// search filter, so they must match the backend spelling exactly.
pub const EMPLOYMENT_TYPES: [&str; 3] = ["Remote", "Hybrid", "Onsite"];

/// The profile and preference data collected by the 4-step wizard.
///
/// Submitted once as a unit; the wizard never patches a prior submission.
/// Field names are camelCase on the wire, matching what the backend stores
/// and echoes back on `GET /onboarding`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingDraft {
    pub first_step_selections: Vec<String>,
    pub education_status: String,
    pub field_of_study: String,
    pub skills: Vec<String>,
    pub resume_file_name: Option<String>,
    pub preferred_roles: Vec<String>,
    pub employment_types: Vec<String>,
    pub preferred_cities: Vec<String>,
}

impl OnboardingDraft {
    /// Adds `value` to `list` if absent, removes it if present. Backs the
    /// pill-button toggles in steps 1 and 4.
    pub fn toggle(list: &mut Vec<String>, value: &str) {
        if let Some(index) = list.iter().position(|item| item == value) {
            list.remove(index);
        } else {
            list.push(value.to_string());
        }
    }
}

/// Which suggestion vocabulary to query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestKind {
    Skills,
    Roles,
    Cities,
}

impl SuggestKind {
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Roles => "roles",
            Self::Cities => "cities",
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub options: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> OnboardingDraft {
        OnboardingDraft {
            first_step_selections: vec!["Find my First Job".to_string()],
            education_status: "Undergraduate".to_string(),
            field_of_study: "Engineering".to_string(),
            skills: vec!["Python".to_string(), "Django".to_string()],
            resume_file_name: Some("ada_resume.pdf".to_string()),
            preferred_roles: vec!["Software Developer".to_string()],
            employment_types: vec!["Remote".to_string(), "Hybrid".to_string()],
            preferred_cities: vec!["Boston".to_string(), "New York".to_string()],
        }
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let draft = sample_draft();
        let json = serde_json::to_string(&draft).expect("encode");
        let back: OnboardingDraft = serde_json::from_str(&json).expect("decode");
        assert_eq!(back, draft);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(sample_draft()).expect("encode");
        for key in [
            "firstStepSelections",
            "educationStatus",
            "fieldOfStudy",
            "skills",
            "resumeFileName",
            "preferredRoles",
            "employmentTypes",
            "preferredCities",
        ] {
            assert!(json.get(key).is_some(), "missing wire field {key}");
        }
    }

    #[test]
    fn empty_object_decodes_to_default_draft() {
        // GET /onboarding answers `{}` before the first submission.
        let draft: OnboardingDraft = serde_json::from_str("{}").expect("decode");
        assert_eq!(draft, OnboardingDraft::default());
    }

    #[test]
    fn employment_vocabulary_matches_backend_spelling() {
        assert_eq!(EMPLOYMENT_TYPES, ["Remote", "Hybrid", "Onsite"]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut list = Vec::new();
        OnboardingDraft::toggle(&mut list, "Remote");
        assert_eq!(list, vec!["Remote".to_string()]);
        OnboardingDraft::toggle(&mut list, "Hybrid");
        OnboardingDraft::toggle(&mut list, "Remote");
        assert_eq!(list, vec!["Hybrid".to_string()]);
    }
}
