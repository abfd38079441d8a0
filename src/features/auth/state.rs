//! Auth session state and context for the frontend. The provider hydrates the
//! session once on mount through the injected backend and exposes the derived
//! `ViewState` the navigation bar renders from. Only the account email is kept
//! in memory; cookies remain `HttpOnly`.

use crate::features::{
    auth::{
        backend::{AuthBackend, DetachedBackend, SignOutFuture},
        types::UserSession,
    },
    nav::ViewState,
};
use leptos::{prelude::*, task::spawn_local};
use std::sync::Arc;

/// Auth session context shared through Leptos.
#[derive(Clone)]
pub struct AuthContext {
    pub session: RwSignal<Option<UserSession>>,
    pub view_state: Signal<ViewState>,
    backend: Arc<dyn AuthBackend>,
}

impl AuthContext {
    /// Builds a context with no session around the given backend.
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        let session = RwSignal::new(None);
        let view_state =
            Signal::derive(move || session.with(|session| ViewState::from_session(session.as_ref())));
        Self {
            session,
            view_state,
            backend,
        }
    }

    /// Updates the in-memory session after login or hydration.
    pub fn set_session(&self, session: UserSession) {
        self.session.set(Some(session));
    }

    /// Loads the current session from the backend. Failures leave the user
    /// signed out.
    pub async fn hydrate(&self) {
        match self.backend.fetch_session().await {
            Ok(Some(session)) => self.set_session(session),
            Ok(None) => tracing::debug!("no active session"),
            Err(err) => tracing::warn!(error = %err, "failed to load session"),
        }
    }

    /// Ends the session with the backend, clearing local state only once the
    /// backend confirms.
    pub fn sign_out(&self) -> SignOutFuture {
        let session = self.session;
        let request = self.backend.sign_out();
        Box::pin(async move {
            request.await?;
            session.set(None);
            Ok(())
        })
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(backend: Arc<dyn AuthBackend>, children: Children) -> impl IntoView {
    let auth = AuthContext::new(backend);
    provide_context(auth.clone());

    spawn_local(async move {
        auth.hydrate().await;
    });

    view! { {children()} }
}

/// Returns the current auth context, or a signed-out context when no provider
/// is mounted.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(Arc::new(DetachedBackend)))
}
