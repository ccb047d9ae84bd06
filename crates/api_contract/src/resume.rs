//! Résumé upload, tailoring, matching, and export payloads, plus the
//! replace-only client state a tailoring result is applied to.

use crate::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
pub struct UploadResponse {
    #[serde(default, alias = "parsed_resume")]
    pub resume_text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TailorRequest {
    pub resume: String,
    pub jd: String,
    pub role: String,
    pub company: String,
}

impl TailorRequest {
    /// Fast-fails before any network call when either text is blank.
    pub fn validate(&self) -> Result<(), Error> {
        if self.resume.trim().is_empty() {
            return Err(Error::EmptyInput("resume"));
        }
        if self.jd.trim().is_empty() {
            return Err(Error::EmptyInput("job description"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TailorResult {
    pub tailored_resume: String,
    #[serde(default)]
    pub original_match: f64,
    #[serde(default)]
    pub tailored_match: f64,
}

/// Client-side outcome of tailoring. Each application replaces the previous
/// result outright, never merges, so repeating a call with a fixed backend
/// response is a no-op after the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TailorState {
    pub tailored_resume: Option<String>,
    pub original_match: Option<f64>,
    pub tailored_match: Option<f64>,
}

impl TailorState {
    pub fn apply(&mut self, result: &TailorResult) {
        self.tailored_resume = Some(result.tailored_resume.clone());
        self.original_match = Some(result.original_match);
        self.tailored_match = Some(result.tailored_match);
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRequest {
    pub resume: String,
    pub jd: String,
}

impl MatchRequest {
    pub fn validate(&self) -> Result<(), Error> {
        if self.resume.trim().is_empty() {
            return Err(Error::EmptyInput("resume"));
        }
        if self.jd.trim().is_empty() {
            return Err(Error::EmptyInput("job description"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MatchResult {
    #[serde(default)]
    pub ats_score: Option<f64>,
    #[serde(default)]
    pub semantic_score: Option<f64>,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub resume_text: String,
    pub format: ExportFormat,
    pub file_name: String,
}

impl DownloadRequest {
    pub fn validate(&self) -> Result<(), Error> {
        if self.resume_text.trim().is_empty() {
            return Err(Error::EmptyInput("resume"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tailor_validate_rejects_blank_inputs() {
        let blank_resume = TailorRequest {
            resume: "   ".to_string(),
            jd: "Looking for Python backend engineer".to_string(),
            role: "Generic".to_string(),
            company: "Unknown".to_string(),
        };
        assert!(blank_resume.validate().is_err());

        let blank_jd = TailorRequest {
            resume: "Software engineer with 5 years Python".to_string(),
            jd: String::new(),
            role: "Generic".to_string(),
            company: "Unknown".to_string(),
        };
        assert!(blank_jd.validate().is_err());
    }

    #[test]
    fn apply_is_idempotent_by_replacement() {
        let result = TailorResult {
            tailored_resume: "Python backend engineer, 5 years".to_string(),
            original_match: 60.0,
            tailored_match: 85.0,
        };

        let mut once = TailorState::default();
        once.apply(&result);

        let mut many = TailorState::default();
        for _ in 0..5 {
            many.apply(&result);
        }
        assert_eq!(once, many);
        assert_eq!(once.original_match, Some(60.0));
        assert_eq!(once.tailored_match, Some(85.0));
    }

    #[test]
    fn download_request_serializes_lowercase_format() {
        let request = DownloadRequest {
            resume_text: "text".to_string(),
            format: ExportFormat::Docx,
            file_name: "AI_Resume".to_string(),
        };
        let json = serde_json::to_value(&request).expect("encode");
        assert_eq!(json["format"], "docx");
        assert_eq!(json["file_name"], "AI_Resume");
    }

    #[test]
    fn upload_response_accepts_legacy_field_name() {
        let legacy: UploadResponse =
            serde_json::from_str(r#"{"parsed_resume": "extracted text"}"#).expect("decode");
        assert_eq!(legacy.resume_text, "extracted text");
    }
}
