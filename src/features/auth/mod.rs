//! Auth feature module: session payloads, the backend capability the app is
//! wired with, the shared session context, and the sign-out flow used by the
//! navigation bar. Session cookies stay `HttpOnly`; only the account email is
//! held in memory.

pub(crate) mod backend;
pub(crate) mod sign_out;
pub(crate) mod state;
pub(crate) mod types;
