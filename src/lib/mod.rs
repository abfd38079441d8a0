//! Shared frontend utilities for API access, configuration, errors, logging,
//! and build metadata. Feature code goes through these helpers so request
//! setup, timeouts, and error mapping stay consistent across the app.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logging;
pub(crate) mod theme;

pub(crate) use errors::AppError;
