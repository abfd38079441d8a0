//! The sign-out flow triggered from the navigation bar. The view only starts
//! the request and records how it ended; clearing the session is the auth
//! context's job.

use crate::{
    app_lib::AppError,
    features::auth::{backend::SignOutFuture, state::AuthContext},
};
use std::{fmt, sync::Arc};

/// Injected sign-out capability handed to the navigation bar.
#[derive(Clone)]
pub struct SignOutAction(Arc<dyn Fn() -> SignOutFuture + Send + Sync>);

impl SignOutAction {
    pub fn new(sign_out: impl Fn() -> SignOutFuture + Send + Sync + 'static) -> Self {
        Self(Arc::new(sign_out))
    }

    /// Signs out through the shared auth context.
    pub fn from_auth(auth: AuthContext) -> Self {
        Self::new(move || auth.sign_out())
    }

    fn start(&self) -> SignOutFuture {
        (self.0)()
    }
}

impl fmt::Debug for SignOutAction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SignOutAction")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignOutOutcome {
    SignedOut,
    Failed(AppError),
}

/// Runs the sign-out request and logs the result. Failures are not retried
/// and never surface in the UI.
pub async fn run_sign_out(action: &SignOutAction) -> SignOutOutcome {
    match action.start().await {
        Ok(()) => {
            tracing::info!("signed out successfully");
            SignOutOutcome::SignedOut
        }
        Err(err) => {
            tracing::error!(error = %err, "sign out failed");
            SignOutOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SignOutAction, SignOutOutcome, run_sign_out};
    use crate::app_lib::AppError;
    use futures::executor::block_on;
    use std::{
        fmt::{self, Write as _},
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };
    use tracing::{
        Event, Level, Subscriber,
        field::{Field, Visit},
    };
    use tracing_subscriber::{
        Layer,
        layer::{Context, SubscriberExt},
        registry,
    };

    type Captured = Arc<Mutex<Vec<(Level, String)>>>;

    struct CaptureLayer(Captured);

    struct FieldWriter(String);

    impl Visit for FieldWriter {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            let _ = write!(self.0, "{}={:?} ", field.name(), value);
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut writer = FieldWriter(String::new());
            event.record(&mut writer);
            if let Ok(mut events) = self.0.lock() {
                events.push((*event.metadata().level(), writer.0));
            }
        }
    }

    fn run_captured(action: &SignOutAction) -> (SignOutOutcome, Vec<(Level, String)>) {
        let captured = Captured::default();
        let subscriber = registry().with(CaptureLayer(captured.clone()));
        let outcome =
            tracing::subscriber::with_default(subscriber, || block_on(run_sign_out(action)));
        let events = captured.lock().unwrap().clone();
        (outcome, events)
    }

    #[test]
    fn successful_sign_out_logs_info_event() {
        let action = SignOutAction::new(|| Box::pin(async { Ok(()) }));

        let (outcome, events) = run_captured(&action);

        assert_eq!(outcome, SignOutOutcome::SignedOut);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, Level::INFO);
        assert!(events[0].1.contains("signed out successfully"), "{events:?}");
    }

    #[test]
    fn failed_sign_out_logs_error_with_cause() {
        let action = SignOutAction::new(|| {
            Box::pin(async { Err(AppError::Network("connection reset".to_string())) })
        });

        let (outcome, events) = run_captured(&action);

        assert_eq!(
            outcome,
            SignOutOutcome::Failed(AppError::Network("connection reset".to_string()))
        );
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, Level::ERROR);
        assert!(events[0].1.contains("sign out failed"), "{events:?}");
        assert!(
            events[0].1.contains("Network error: connection reset"),
            "{events:?}"
        );
    }

    #[test]
    fn each_run_issues_exactly_one_request() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let action = SignOutAction::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Box::pin(async { Err(AppError::Timeout("slow".to_string())) })
        });

        block_on(run_sign_out(&action));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        block_on(run_sign_out(&action.clone()));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
