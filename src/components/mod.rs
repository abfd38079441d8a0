//! Shared UI components exported for the app root and routes.

pub(crate) mod layout;

pub(crate) use layout::AppShell;
