//! Session payload returned by the job-board API.

use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};

/// The signed-in account. A session always carries a non-empty email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionPayload")]
pub struct UserSession {
    email: String,
}

impl UserSession {
    /// Builds a session, rejecting blank emails.
    pub fn new(email: impl Into<String>) -> Result<Self, AppError> {
        let email = email.into();
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(AppError::Session("session email is empty".to_string()));
        }
        Ok(Self {
            email: trimmed.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Deserialize)]
struct SessionPayload {
    email: String,
}

impl TryFrom<SessionPayload> for UserSession {
    type Error = AppError;

    fn try_from(payload: SessionPayload) -> Result<Self, Self::Error> {
        Self::new(payload.email)
    }
}
