//! REST API helpers for the `/users/*` auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the HTTP implementation returns an error, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an `ApiError` so the form that issued the
//! request can show it; nothing in this module logs or swallows errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, Credentials};

/// Endpoint used by the login form.
pub const LOGIN_ENDPOINT: &str = "/users/login";
/// Endpoint used by the register form.
pub const REGISTER_ENDPOINT: &str = "/users/register";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message} ({status})")]
    Status { status: u16, message: String },
    /// The response body was not the expected JSON.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Request seam for credential submission.
///
/// The browser uses `HttpAuthApi`; tests substitute an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Submit `credentials` to `endpoint` and decode the `{ token, user }` reply.
    async fn post_credentials(&self, endpoint: &str, credentials: &Credentials) -> Result<AuthResponse, ApiError>;
}

/// `AuthApi` backed by `fetch` against the page's own origin.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    #[cfg(test)]
    fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url.trim_end_matches('/'))
    }
}

/// Build the user-facing message for a non-2xx response.
///
/// Prefers the server's `{ "error": ... }` body and falls back to the status.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<super::types::ErrorBody>(body)
        .map(|b| b.error)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "request failed".to_owned());
    ApiError::Status { status, message }
}

impl AuthApi for HttpAuthApi {
    async fn post_credentials(&self, endpoint: &str, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(endpoint))
                .json(credentials)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(status_error(resp.status(), &body));
            }
            resp.json::<AuthResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(endpoint), credentials);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
