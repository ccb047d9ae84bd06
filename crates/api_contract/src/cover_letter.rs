use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoverLetterRequest {
    pub resume_text: String,
    pub job_description: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring_manager: Option<String>,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}
