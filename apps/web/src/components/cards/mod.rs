//! Card components for list pages.

mod job_card;

pub(crate) use job_card::JobCard;
