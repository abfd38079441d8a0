//! Placeholder body for navbar destinations whose pages live outside this crate.

use leptos::prelude::*;

#[component]
pub fn SectionPage(title: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <section class="py-12">
            <h1 class="flex items-center gap-2 text-2xl font-bold text-gray-900 dark:text-white">
                <span class="material-symbols-outlined text-indigo-500">{icon}</span>
                {title}
            </h1>
        </section>
    }
}
