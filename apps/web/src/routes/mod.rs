mod apply;
mod cover_letter;
mod editor;
mod interview;
mod job_detail;
mod jobs;
mod login;
mod not_found;
mod onboarding;
mod resume;
mod signup;

pub(crate) use apply::ApplyPage;
pub(crate) use cover_letter::CoverLetterPage;
pub(crate) use editor::ResumeEditorPage;
pub(crate) use interview::InterviewPracticePage;
pub(crate) use job_detail::JobDetailPage;
pub(crate) use jobs::RecommendedJobsPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use onboarding::OnboardingPage;
pub(crate) use resume::AiResumePage;
pub(crate) use signup::SignUpPage;

use crate::components::layout::SidebarLayout;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;

/// Route path constants, the single place link targets are spelled out.
pub(crate) mod paths {
    pub const LOGIN: &str = "/";
    pub const SIGNUP: &str = "/signup";
    pub const ONBOARDING: &str = "/onboarding";
    pub const JOBS: &str = "/recommended-jobs";
    pub const AI_RESUME: &str = "/ai-resume";
    pub const RESUME_EDITOR: &str = "/resume-editor";
    pub const INTERVIEW: &str = "/ai-interview-practice";
    pub const COVER_LETTER: &str = "/cover-letter";

    pub fn job_detail(id: &str) -> String {
        format!("/job/{id}")
    }

    pub fn apply(id: &str) -> String {
        format!("/apply/{id}")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            // Entry pages render without the sidebar chrome.
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/onboarding") view=OnboardingPage />
            <ParentRoute path=path!("") view=SidebarLayout>
                <Route path=path!("/recommended-jobs") view=RecommendedJobsPage />
                <Route path=path!("/job/:id") view=JobDetailPage />
                <Route path=path!("/apply/:id") view=ApplyPage />
                <Route path=path!("/ai-resume") view=AiResumePage />
                <Route path=path!("/resume-editor") view=ResumeEditorPage />
                <Route path=path!("/ai-interview-practice") view=InterviewPracticePage />
                <Route path=path!("/cover-letter") view=CoverLetterPage />
            </ParentRoute>
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
