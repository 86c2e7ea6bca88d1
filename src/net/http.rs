//! HTTP request pipeline with cookie credentials and 401 recovery.
//!
//! Every request goes through one pipeline that includes credentials
//! (httpOnly session cookies set by the API; the client never touches
//! tokens). A 401 response triggers at most one silent call to the refresh
//! endpoint followed by at most one replay of the original request.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error, since the API is
//! only reachable from the browser.
//!
//! RECOVERY POLICY
//! ===============
//! The refresh decision is the pure function [`on_unauthorized`]; the
//! transport code never refreshes recursively. Requests that already target
//! `/api/auth/*` are never refreshed (a 401 from the refresh endpoint must
//! not trigger another refresh), and a 401 on a replayed request is
//! surfaced as [`ApiError::SessionExpired`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

/// Failure taxonomy for API calls.
///
/// `SessionExpired` is the terminal authentication error: refresh failed or
/// a replayed request was rejected again. Callers clear the session when
/// they see it; the route guard then performs the login redirect.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("cannot reach server: {0}")]
    Network(String),
    #[error("session expired")]
    SessionExpired,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// HTTP methods used by this client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// What to do about a 401 response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery {
    /// Call the refresh endpoint once, then replay the original request once.
    RefreshAndRetry,
    /// Surface the 401 to the caller without refreshing.
    Surface,
}

/// True for requests targeting the auth endpoints themselves.
#[must_use]
pub fn is_auth_path(path: &str) -> bool {
    path.starts_with("/api/auth/")
}

/// Decide how to handle a 401 for the given request.
///
/// `already_retried` is the per-request marker that prevents more than one
/// refresh per originating request; it is set after the first replay and
/// never cleared, so a second 401 can never trigger a second refresh.
#[must_use]
pub fn on_unauthorized(path: &str, already_retried: bool) -> Recovery {
    if already_retried || is_auth_path(path) {
        Recovery::Surface
    } else {
        Recovery::RefreshAndRetry
    }
}

/// Send a request and decode a JSON response body.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the server is unreachable (always on
/// SSR), [`ApiError::SessionExpired`] on terminal 401s, [`ApiError::Status`]
/// for other non-2xx responses, and [`ApiError::Decode`] for bad bodies.
pub async fn request_json<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_with_recovery(method, path, body.as_ref()).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Send a request and discard the response body.
///
/// # Errors
///
/// Same taxonomy as [`request_json`].
pub async fn request_unit(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_with_recovery(method, path, body.as_ref()).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Send once; on 401, refresh at most once and replay at most once.
#[cfg(feature = "hydrate")]
async fn send_with_recovery(
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = send_once(method, path, body).await?;
    if resp.status() != 401 {
        return check_status(resp);
    }

    match on_unauthorized(path, false) {
        Recovery::Surface => check_status(resp),
        Recovery::RefreshAndRetry => {
            refresh_session().await?;
            let replayed = send_once(method, path, body).await?;
            if replayed.status() == 401 {
                // The replay already consumed the one allowed refresh.
                return Err(ApiError::SessionExpired);
            }
            check_status(replayed)
        }
    }
}

/// Call the refresh endpoint once. Never retried, never recursive.
#[cfg(feature = "hydrate")]
async fn refresh_session() -> Result<(), ApiError> {
    let resp = send_once(Method::Post, "/api/auth/refresh", None).await?;
    if resp.ok() {
        Ok(())
    } else {
        leptos::logging::warn!("session refresh rejected with status {}", resp.status());
        Err(ApiError::SessionExpired)
    }
}

#[cfg(feature = "hydrate")]
fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

/// Build and send a single request with credentials included.
#[cfg(feature = "hydrate")]
async fn send_once(
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(path),
        Method::Post => Request::post(path),
        Method::Delete => Request::delete(path),
    }
    .credentials(web_sys::RequestCredentials::Include);

    let request = match body {
        Some(json) => builder
            .json(json)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };

    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}
