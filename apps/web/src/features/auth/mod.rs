//! Signup, login, and session lifecycle. The session token lives in local
//! storage and every authorized request derives its header from it; pages
//! never touch the token directly.

pub(crate) mod client;
pub(crate) mod guards;
pub(crate) mod state;

pub(crate) use guards::RequireSession;
