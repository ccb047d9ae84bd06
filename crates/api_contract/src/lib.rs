mod auth;
mod cover_letter;
mod error;
mod interview;
mod jobs;
mod onboarding;
mod resume;
mod session;
mod wizard;

pub use auth::{AuthResponse, LoginRequest, SignupRequest};
pub use cover_letter::{CoverLetterRequest, CoverLetterResponse};
pub use error::{detail_or, Error};
pub use interview::{
    EvaluateRequest, EvaluateResponse, InterviewStartRequest, InterviewStartResponse,
};
pub use jobs::{
    posted_age, AutoApplyRequest, Job, JobDetailResponse, JobSearchRequest, JobsResponse,
    StatusResponse,
};
pub use onboarding::{OnboardingDraft, SuggestKind, SuggestResponse, EMPLOYMENT_TYPES};
pub use resume::{
    DownloadRequest, ExportFormat, MatchRequest, MatchResult, TailorRequest, TailorResult,
    TailorState, UploadResponse,
};
pub use session::{storage_keys, Session};
pub use wizard::WizardStep;
