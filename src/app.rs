use crate::{
    app_lib::config::AppConfig,
    components::AppShell,
    features::auth::{backend::AuthBackend, state::AuthProvider},
    routes::AppRoutes,
};
use leptos::prelude::*;
use leptos_router::components::Router;
use std::sync::Arc;

#[component]
pub fn App(config: AppConfig, backend: Arc<dyn AuthBackend>) -> impl IntoView {
    provide_context(config);

    view! {
        <AuthProvider backend=backend>
            <Router>
                <AppShell>
                    <AppRoutes />
                </AppShell>
            </Router>
        </AuthProvider>
    }
}
