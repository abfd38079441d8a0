use crate::features::auth::state::use_auth;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        if auth.view_state.get().is_authenticated() {
            "Welcome back. Manage your postings and applications from the menu."
        } else {
            "Browse open positions, or register to post jobs and track applications."
        }
    };

    view! {
        <section class="py-12 text-center">
            <h1 class="text-3xl font-bold text-gray-900 dark:text-white">"Find your next job"</h1>
            <p class="mt-4 text-gray-500 dark:text-gray-400">{greeting}</p>
        </section>
    }
}
