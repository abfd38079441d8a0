#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code, unused_imports))]

mod app;
#[path = "lib/mod.rs"]
mod app_lib;
mod components;
mod features;
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::{
    app::App,
    app_lib::{build_info, config::AppConfig, logging},
    features::auth::backend::{AuthBackend, HttpAuthBackend},
};
#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, rejected_levels) = AppConfig::load();
    logging::init(&config);
    for value in rejected_levels {
        tracing::warn!(value = %value, "ignoring unknown log level");
    }
    tracing::info!(
        commit = build_info::git_commit_hash(),
        api = %config.api_base_url,
        "job board web starting"
    );

    let backend: Arc<dyn AuthBackend> = Arc::new(HttpAuthBackend::new(&config));
    mount_to_body(move || view! { <App config=config backend=backend /> });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
