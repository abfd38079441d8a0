//! Browser logging setup. Events go to the developer console through
//! `tracing-wasm`; native builds (tests) leave subscriber setup to the caller.

use super::config::AppConfig;

/// Installs the global console subscriber at the configured level.
#[cfg(target_arch = "wasm32")]
pub fn init(config: &AppConfig) {
    let layer_config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(config.log_level)
        .build();
    tracing_wasm::set_as_global_default_with_config(layer_config);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init(_config: &AppConfig) {}
