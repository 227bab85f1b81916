//! REST calls for login, signup, and logout.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with [`ApiError::Transport`], the same
//! signal a browser gets when no backend is listening.
//!
//! ERROR HANDLING
//! ==============
//! `send()` failures map to `Transport`, non-2xx answers to `Status` with the
//! JSON error body when there is one, and body (de)serialization to `Decode`.
//! Login and signup both require a JSON success body.
//! Callers never inspect error text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, LoginRequest, LoginResponse, SignupRequest};
use crate::config::ApiEndpoints;

#[cfg(any(test, feature = "csr"))]
use super::types::ErrorBody;

/// Auth backend seam. Enables mocking in flow tests.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// `POST` credentials to the login endpoint.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] describing where the request failed.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `POST` a new account to the signup endpoint. The success body must be
    /// JSON; its contents are not used.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] describing where the request failed.
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;

    /// `POST` to the logout endpoint. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request could not be sent or was rejected.
    async fn logout(&self) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, raw_body: Option<&str>) -> ApiError {
    ApiError::Status { status, body: raw_body.and_then(ErrorBody::parse) }
}

/// Decode a 2xx body. An empty or non-JSON body is a [`ApiError::Decode`].
#[cfg(any(test, feature = "csr"))]
fn decode_body<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, ApiError> {
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
fn no_browser() -> ApiError {
    ApiError::Transport("fetch is not available outside the browser".to_owned())
}

/// [`AuthApi`] backed by the browser's `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    endpoints: ApiEndpoints,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(endpoints: ApiEndpoints) -> Self {
        Self { endpoints }
    }
}

#[cfg(feature = "csr")]
async fn read_body(resp: &gloo_net::http::Response) -> Result<String, ApiError> {
    resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<gloo_net::http::Response, ApiError> {
    let request = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let raw = resp.text().await.ok();
    Err(status_error(resp.status(), raw.as_deref()))
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = post_json(&self.endpoints.login, request).await?;
            decode_body(&read_body(&resp).await?)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(no_browser())
        }
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = post_json(&self.endpoints.signup, request).await?;
            decode_body::<serde_json::Value>(&read_body(&resp).await?)?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(no_browser())
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoints.logout)
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp.status(), None));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(no_browser())
        }
    }
}
