//! Feature modules: one client per backend domain plus session state.

pub(crate) mod auth;
pub(crate) mod cover_letter;
pub(crate) mod interview;
pub(crate) mod jobs;
pub(crate) mod onboarding;
pub(crate) mod resume;
