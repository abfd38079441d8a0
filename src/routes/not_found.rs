//! Minimal 404 page for unknown routes. Rendered inside the app shell, so it
//! only provides content.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <div class="relative">
                <h1 class="text-9xl font-black text-gray-100 dark:text-gray-800 select-none">
                    "404"
                </h1>
                <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 dark:text-white whitespace-nowrap">
                    "Page not found"
                </p>
            </div>

            <p class="mt-4 text-gray-500 dark:text-gray-400 max-w-sm mx-auto">
                "The page you requested does not exist."
            </p>

            <A
                href={paths::HOME}
                {..}
                class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-indigo-600 rounded-lg hover:bg-indigo-700 focus:ring-4 focus:outline-none focus:ring-indigo-300 transition-all"
            >
                <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                "Go Home"
            </A>
        </div>
    }
}
