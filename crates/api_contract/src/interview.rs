//! Mock-interview payloads. The avatar media URLs are optional: the backend
//! omits them when its synthesis providers are unavailable.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InterviewStartRequest {
    pub resume: String,
    pub jd: String,
    pub round: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct InterviewStartResponse {
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub answer: String,
    pub jd: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EvaluateResponse {
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_urls_are_optional() {
        let bare: InterviewStartResponse =
            serde_json::from_str(r#"{"question": "Tell me about yourself."}"#).expect("decode");
        assert!(bare.audio_url.is_none() && bare.video_url.is_none());

        let full: InterviewStartResponse = serde_json::from_str(
            r#"{"question": "Q", "audio_url": "/static/audio.mp3", "video_url": "https://a/v"}"#,
        )
        .expect("decode");
        assert_eq!(full.audio_url.as_deref(), Some("/static/audio.mp3"));
    }
}
