//! Build-time configuration for the API endpoint, brand text, and log level,
//! with an optional runtime override. The runtime config is read from
//! `window.JOBBOARD_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not store
//! secrets here.

use tracing::Level;

const DEFAULT_BRAND_NAME: &str = "Hello World";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub brand_name: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime
    /// overrides. Also returns log level values that were rejected, so the
    /// caller can report them once logging is installed.
    pub fn load() -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();
        let build = RuntimeConfig {
            api_base_url: option_env!("JOBBOARD_API_BASE_URL").and_then(normalize_runtime_value),
            brand_name: option_env!("JOBBOARD_BRAND_NAME").and_then(normalize_runtime_value),
            log_level: option_env!("JOBBOARD_LOG_LEVEL").and_then(normalize_runtime_value),
        };
        rejected.extend(apply_runtime_overrides(&mut config, build));

        if let Some(runtime) = runtime_config() {
            rejected.extend(apply_runtime_overrides(&mut config, runtime));
        }

        (config, rejected)
    }
}

/// Parses a log level name (`error`..`trace`, any case) or its index `0..=4`.
pub fn parse_log_level(value: &str) -> Option<Level> {
    if let Ok(index) = value.trim().parse::<u8>() {
        return match index {
            0 => Some(Level::ERROR),
            1 => Some(Level::WARN),
            2 => Some(Level::INFO),
            3 => Some(Level::DEBUG),
            4 => Some(Level::TRACE),
            _ => None,
        };
    }

    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    brand_name: Option<String>,
    log_level: Option<String>,
}

/// Applies overrides and returns an unparseable log level, which leaves the
/// current level in place.
fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) -> Option<String> {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.brand_name {
        config.brand_name = value;
    }
    let value = runtime.log_level?;
    match parse_log_level(&value) {
        Some(level) => {
            config.log_level = level;
            None
        }
        None => Some(value),
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("JOBBOARD_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        brand_name: read_runtime_value(&object, "brand_name"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
