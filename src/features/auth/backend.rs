//! The authentication capability the app is wired with. The browser build
//! uses `HttpAuthBackend`; tests and a missing provider use other
//! implementations of the same trait.

use crate::{app_lib::AppError, features::auth::types::UserSession};
use futures::future::LocalBoxFuture;

pub type SessionFuture = LocalBoxFuture<'static, Result<Option<UserSession>, AppError>>;
pub type SignOutFuture = LocalBoxFuture<'static, Result<(), AppError>>;

/// Session lookup and termination against an authentication provider.
pub trait AuthBackend: Send + Sync {
    /// Returns the current session, or `None` when nobody is signed in.
    fn fetch_session(&self) -> SessionFuture;

    /// Ends the current session on the provider side.
    fn sign_out(&self) -> SignOutFuture;
}

/// Stand-in used when no provider has been mounted.
pub struct DetachedBackend;

impl AuthBackend for DetachedBackend {
    fn fetch_session(&self) -> SessionFuture {
        Box::pin(async { Ok(None) })
    }

    fn sign_out(&self) -> SignOutFuture {
        Box::pin(async {
            Err(AppError::Session(
                "no authentication provider is mounted".to_string(),
            ))
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub use http::HttpAuthBackend;

#[cfg(target_arch = "wasm32")]
mod http {
    use super::{AuthBackend, SessionFuture, SignOutFuture};
    use crate::app_lib::{
        api::{get_optional_json_with_credentials, post_empty_with_credentials},
        config::AppConfig,
    };

    const SESSION_PATH: &str = "/v1/auth/session";
    const LOGOUT_PATH: &str = "/v1/auth/logout";

    /// Cookie-authenticated client for the job-board auth endpoints.
    pub struct HttpAuthBackend {
        api_base_url: String,
    }

    impl HttpAuthBackend {
        pub fn new(config: &AppConfig) -> Self {
            Self {
                api_base_url: config.api_base_url.clone(),
            }
        }
    }

    impl AuthBackend for HttpAuthBackend {
        fn fetch_session(&self) -> SessionFuture {
            let base = self.api_base_url.clone();
            Box::pin(async move { get_optional_json_with_credentials(&base, SESSION_PATH).await })
        }

        fn sign_out(&self) -> SignOutFuture {
            let base = self.api_base_url.clone();
            Box::pin(async move { post_empty_with_credentials(&base, LOGOUT_PATH).await })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthBackend, DetachedBackend};
    use crate::app_lib::AppError;
    use futures::executor::block_on;

    #[test]
    fn detached_backend_has_no_session() {
        assert_eq!(block_on(DetachedBackend.fetch_session()), Ok(None));
    }

    #[test]
    fn detached_backend_refuses_sign_out() {
        assert!(matches!(
            block_on(DetachedBackend.sign_out()),
            Err(AppError::Session(_))
        ));
    }
}
