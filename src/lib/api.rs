//! HTTP helpers for the job-board JSON API with consistent timeouts and error
//! handling. Auth adapters use these helpers instead of building requests
//! inline. Requests include cookies; nothing here stores credentials.

use super::errors::AppError;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::{Request, Response};
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use serde::de::DeserializeOwned;
#[cfg(target_arch = "wasm32")]
use web_sys::{AbortController, AbortSignal, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters kept in `AppError::Http`.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON with cookies and returns `None` when the server reports no resource.
#[cfg(target_arch = "wasm32")]
pub async fn get_optional_json_with_credentials<T: DeserializeOwned>(
    base_url: &str,
    path: &str,
) -> Result<Option<T>, AppError> {
    let url = build_url_with_base(base_url, path);
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build request: {err}")))
    })
    .await?;

    if is_absent_status(response.status()) {
        return Ok(None);
    }
    if response.ok() {
        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Posts an empty body with cookies, used to end a session.
#[cfg(target_arch = "wasm32")]
pub async fn post_empty_with_credentials(base_url: &str, path: &str) -> Result<(), AppError> {
    let url = build_url_with_base(base_url, path);
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body("")
            .map_err(|err| AppError::Config(format!("Failed to build request: {err}")))
    })
    .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

/// Sends a request with an abort timeout so a stalled API cannot hang the UI.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    classify_request_error(&err.to_string())
}

#[cfg(target_arch = "wasm32")]
async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: sanitize_body(&body),
    }
}

/// Maps a transport failure message to a timeout or network error.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn classify_request_error(message: &str) -> AppError {
    let lowered = message.to_lowercase();
    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Statuses the session endpoint uses to say "nobody is signed in".
pub fn is_absent_status(status: u16) -> bool {
    matches!(status, 204 | 401 | 404)
}

/// Joins a base URL and a path with exactly one slash between them.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Trims and truncates HTTP error bodies before they are logged.
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
