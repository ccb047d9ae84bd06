//! HTTP helpers for the LaunchHire backend with consistent timeouts and error
//! handling. Feature clients use these helpers to avoid duplicating request
//! setup; no other module issues network calls. Every request carries an
//! abort signal so a stalled call is reaped instead of pinning the UI in a
//! loading state forever.

use super::{config::AppConfig, errors::AppError, storage};
use api_contract::detail_or;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::to_string;
use wasm_bindgen::JsValue;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Fetches JSON. Suggestion and onboarding lookups tolerate a missing token;
/// the backend rejects what actually requires auth.
pub async fn get_json<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        with_auth(Request::get(&url).abort_signal(Some(signal)))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response, fallback).await
}

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        with_auth(
            Request::post(&url)
                .header("Content-Type", "application/json")
                .abort_signal(Some(signal)),
        )
        .body(payload)
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response, fallback).await
}

/// Posts a multipart form (résumé upload) and parses a JSON response. The
/// browser sets the multipart boundary header itself.
pub async fn post_multipart<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
    fallback: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(move |signal| {
        with_auth(Request::post(&url).abort_signal(Some(signal)))
            .body(JsValue::from(form))
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response, fallback).await
}

/// Posts JSON and returns the raw response bytes (document export).
pub async fn post_binary<B: Serialize>(
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<Vec<u8>, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        with_auth(
            Request::post(&url)
                .header("Content-Type", "application/json")
                .abort_signal(Some(signal)),
        )
        .body(payload)
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    if response.ok() {
        response
            .binary()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to read document: {err}")))
    } else {
        Err(http_error(response, fallback).await)
    }
}

/// Attaches `Authorization: Bearer <token>` when a session token is
/// persisted; without one the request goes out unauthenticated.
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout
/// detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    gloo_console::error!("request failed:", message.clone());
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Serialization("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses; non-2xx surfaces the backend `detail` message or
/// the operation's fallback.
async fn handle_json_response<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response, fallback).await)
    }
}

async fn http_error(response: Response, fallback: &str) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    gloo_console::warn!("api error", status, body.clone());
    AppError::Http {
        status,
        message: detail_or(&body, fallback),
    }
}
