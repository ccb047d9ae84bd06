//! Shared frontend utilities for API access, configuration, errors, and
//! persisted local state.
//!
//! ## Network boundary
//!
//! Every backend call goes through `api`; feature clients wrap it with typed
//! functions and routes depend only on those. No other module may build a
//! request. Non-2xx responses surface the backend's `detail` message (or a
//! per-operation fallback) through `AppError::Http`; transport failures
//! collapse into generic network/timeout errors.
//!
//! ## Local state
//!
//! `storage` is the single owner of the browser's local storage. Pages read
//! and write session and résumé state only through its typed accessors, and
//! logout clears every key it manages in one call.

pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod storage;

pub(crate) const GIT_COMMIT_HASH: &str = env!("LAUNCHHIRE_WEB_GIT_SHA");

pub(crate) use api::{get_json, post_binary, post_json, post_multipart};
pub(crate) use errors::AppError;
