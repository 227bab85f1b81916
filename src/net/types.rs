//! JSON payloads and errors for the auth endpoints.
//!
//! DESIGN
//! ======
//! Failures are split by where they happened rather than by message text:
//! a request that never reached a server is [`ApiError::Transport`], a server
//! that answered non-2xx is [`ApiError::Status`], and a body that could not be
//! (de)serialized is [`ApiError::Decode`]. Flows branch on the variant.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `POST /api/login` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/login` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub name: Option<String>,
}

/// `POST /api/signup` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Error body returned with non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse an error body; `None` when the text is not JSON at all.
    ///
    /// Any JSON value is accepted. `message` is kept only when it is a
    /// non-empty string, so `"Unauthorized"`, `[]` or `{"message": 42}` all
    /// read as a body without a message.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(raw).ok()?;
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_owned);
        Some(Self { message })
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent (no backend, DNS, CORS, offline).
    #[error("request could not be sent: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status. `body` is `None` when the
    /// response body was not JSON.
    #[error("server responded with status {status}")]
    Status { status: u16, body: Option<ErrorBody> },

    /// A request or response body could not be encoded or decoded.
    #[error("body could not be decoded: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message to show for a rejected request.
    ///
    /// Server-supplied `message` wins. A JSON body without a message yields
    /// `missing`; a body that was not JSON yields `unparsable`.
    #[must_use]
    pub fn status_message(&self, unparsable: &str, missing: &str) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        let message = match body {
            None => unparsable.to_owned(),
            Some(ErrorBody { message: Some(m) }) if !m.is_empty() => m.clone(),
            Some(_) => missing.to_owned(),
        };
        Some(message)
    }
}
