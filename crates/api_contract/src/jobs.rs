//! Job listing and application payloads.
//!
//! The backend has shipped two shapes for the list and detail endpoints over
//! time (a bare value and a wrapped object); both are accepted via untagged
//! enums so a redeploy on either side cannot break the other.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "type")]
    pub job_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default)]
    pub jd_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Résumé-conditioned fit percentage, 0..=100. Older deployments name
    /// this `match_percentage`.
    #[serde(default, alias = "match_percentage", skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Search request. Preference fields come from the stored onboarding draft
/// and are omitted when the user has not completed the wizard.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct JobSearchRequest {
    pub resume: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_cities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub employment_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum JobsResponse {
    Wrapped { jobs: Vec<Job> },
    List(Vec<Job>),
}

impl JobsResponse {
    #[must_use]
    pub fn into_jobs(self) -> Vec<Job> {
        match self {
            Self::Wrapped { jobs } | Self::List(jobs) => jobs,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum JobDetailResponse {
    Wrapped { job: Job },
    Bare(Job),
}

impl JobDetailResponse {
    #[must_use]
    pub fn into_job(self) -> Job {
        match self {
            Self::Wrapped { job } | Self::Bare(job) => job,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AutoApplyRequest {
    pub resume: String,
    pub job_url: String,
    pub job_title: String,
    pub company: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
}

/// Humanizes a posting age given in whole seconds. Returns `None` at thirty
/// days and beyond; the caller falls back to a locale date string.
#[must_use]
pub fn posted_age(diff_seconds: i64) -> Option<String> {
    match diff_seconds {
        i64::MIN..=-1 => None,
        0..=59 => Some(format!("{diff_seconds}s ago")),
        60..=3599 => Some(format!("{}min ago", diff_seconds / 60)),
        3600..=86_399 => Some(format!("{}hr ago", diff_seconds / 3600)),
        86_400..=2_591_999 => Some(format!("{} days ago", diff_seconds / 86_400)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job_json() -> &'static str {
        r#"{
            "id": "j-42",
            "title": "Backend Engineer",
            "company": "Initech",
            "location": "Boston",
            "type": "Full Time",
            "jd_text": "Looking for Python backend engineer",
            "url": "https://jobs.example.com/j-42",
            "match_percentage": 72.0
        }"#
    }

    #[test]
    fn decodes_bare_list_and_wrapped_forms() {
        let bare = format!("[{}]", sample_job_json());
        let wrapped = format!(r#"{{"jobs": [{}]}}"#, sample_job_json());

        let from_bare: JobsResponse = serde_json::from_str(&bare).expect("bare list");
        let from_wrapped: JobsResponse = serde_json::from_str(&wrapped).expect("wrapped");
        assert_eq!(from_bare.into_jobs(), from_wrapped.into_jobs());
    }

    #[test]
    fn decodes_bare_and_wrapped_detail_forms() {
        let wrapped = format!(r#"{{"job": {}}}"#, sample_job_json());
        let from_wrapped: JobDetailResponse = serde_json::from_str(&wrapped).expect("wrapped");
        let from_bare: JobDetailResponse =
            serde_json::from_str(sample_job_json()).expect("bare");
        assert_eq!(from_wrapped.into_job(), from_bare.into_job());
    }

    #[test]
    fn match_percentage_alias_maps_to_match_score() {
        let job: Job = serde_json::from_str(sample_job_json()).expect("decode");
        assert_eq!(job.match_score, Some(72.0));
        assert_eq!(job.job_type, "Full Time");
    }

    #[test]
    fn posted_age_buckets_match_the_displayed_labels() {
        assert_eq!(posted_age(45), Some("45s ago".to_string()));
        assert_eq!(posted_age(59), Some("59s ago".to_string()));
        assert_eq!(posted_age(60), Some("1min ago".to_string()));
        assert_eq!(posted_age(3_599), Some("59min ago".to_string()));
        assert_eq!(posted_age(3_600), Some("1hr ago".to_string()));
        assert_eq!(posted_age(86_400), Some("1 days ago".to_string()));
        assert_eq!(posted_age(2_591_999), Some("29 days ago".to_string()));
        // Thirty days and beyond fall back to a plain date.
        assert_eq!(posted_age(2_592_000), None);
        // A clock skewed into the future gets no label either.
        assert_eq!(posted_age(-5), None);
    }

    #[test]
    fn empty_preferences_are_omitted_from_search_request() {
        let request = JobSearchRequest {
            resume: "Software engineer".to_string(),
            sort_by: Some("TopMatched".to_string()),
            ..JobSearchRequest::default()
        };
        let json = serde_json::to_value(&request).expect("encode");
        assert!(json.get("preferred_roles").is_none());
        assert_eq!(json["sort_by"], "TopMatched");
    }
}
