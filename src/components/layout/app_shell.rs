//! Shared layout wrapper with the navigation bar and content container. This
//! is where ambient state (auth context, router location, config) is turned
//! into explicit `NavBar` props. Navigation is client-side only; the API must
//! enforce access control.

use crate::{
    app_lib::config::AppConfig,
    components::layout::NavBar,
    features::auth::{sign_out::SignOutAction, state::use_auth},
};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Wraps routes with the navigation bar and a main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());
    let brand_name = use_context::<AppConfig>()
        .unwrap_or_default()
        .brand_name;

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <NavBar
                view_state=auth.view_state
                current_path=current_path
                on_sign_out=SignOutAction::from_auth(auth.clone())
                brand_name=brand_name
            />
            <main class="flex-1">
                <div class="max-w-7xl mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
