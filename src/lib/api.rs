//! HTTP helpers for the JSON auth API with a consistent timeout policy. The
//! helpers hand back the raw status and body so feature clients decide how each
//! status maps onto their own error taxonomy. They never log request bodies,
//! which carry passwords.

use super::errors::AppError;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Status line and body text of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Encodes a request body, keeping serializer details out of user-facing text.
pub fn encode_body<B: serde::Serialize>(body: &B) -> Result<String, AppError> {
    serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Posts JSON to the configured API base and returns the raw response.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: serde::Serialize>(path: &str, body: &B) -> Result<RawResponse, AppError> {
    use super::config::AppConfig;
    use gloo_net::http::Request;

    let config = AppConfig::load();
    let url = build_url_with_base(&config.api_base_url, path);
    let payload = encode_body(body)?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    let status = response.status();
    // A body that cannot be read is treated like an empty one.
    let body = response.text().await.unwrap_or_default();
    Ok(RawResponse { status, body })
}

/// Maps network errors into `AppError` variants with timeout detection.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging the submit button.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}
