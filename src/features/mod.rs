//! Domain-level frontend features. Auth owns the session and the sign-out
//! flow; nav owns the pure decision of which links the bar shows.

pub(crate) mod auth;
pub(crate) mod nav;
