//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Outcome Types** - Result of the last submission on each screen
//! - **API Types** - Request and response bodies shared with the server
//! - **Environment Types** - Page origin injected into presenters
//! - **Error Types** - Frontend error taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::MEDIA_ROUTE;

// =============================================================================
// Outcome Types
// =============================================================================

/// Result of the most recent submission attempt.
///
/// Success and failure are variants of one value, so a screen can never
/// show both panels at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Nothing to show (initial state, or an attempt is in flight)
    Empty,
    /// Last attempt succeeded
    Success(T),
    /// Last attempt failed with a user-facing message
    Failure(String),
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Outcome::Empty
    }
}

/// Outcome of the upload screen.
pub type SubmissionOutcome = Outcome<ResourcePath>;

/// Outcome of the registration screen.
pub type RegistrationOutcome = Outcome<IssuedKey>;

/// Server-relative path of an uploaded media item, e.g. `/media/ab12.png`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Build the path from the identifier the upload endpoint returned.
    pub fn from_identifier(identifier: &str) -> Self {
        Self(format!("{}/{}", MEDIA_ROUTE, identifier))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Access key issued to a newly registered account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuedKey(String);

impl IssuedKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// API Types
// =============================================================================

/// `{ "msg": ... }` body returned by every endpoint.
///
/// `msg` is the payload on success and a human readable error otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub msg: String,
}

/// Body of `POST /user/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    /// Invite key
    pub key: String,
}

/// Status and raw body of an HTTP reply.
///
/// The body is kept as text so each workflow decides when parsing it is
/// required.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON. A malformed body is a transport failure.
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> AppResult<T> {
        serde_json::from_str(&self.body).map_err(|e| AppError::Transport(e.to_string()))
    }
}

// =============================================================================
// Environment Types
// =============================================================================

/// Protocol and host of the page the UI is served from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Origin {
    /// Scheme with trailing colon, as `window.location.protocol` reports it
    pub protocol: String,
    /// Host name with optional port
    pub host: String,
}

impl Origin {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    /// Read the origin of the current page.
    pub fn current() -> AppResult<Self> {
        let location = gloo_utils::window().location();
        let protocol = location
            .protocol()
            .map_err(|e| AppError::Transport(format!("Failed to read protocol: {:?}", e)))?;
        let host = location
            .host()
            .map_err(|e| AppError::Transport(format!("Failed to read host: {:?}", e)))?;
        Ok(Self { protocol, host })
    }

    /// Absolute URL of a server-relative path.
    ///
    /// Without a known host the path is returned unchanged.
    pub fn absolute_url(&self, path: &str) -> String {
        if self.host.is_empty() {
            return path.to_string();
        }
        format!("{}//{}{}", self.protocol, self.host, path)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Every variant is recovered into a failure outcome by the workflow that
/// produced it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Required input missing, detected before any request is made.
    #[error("{0}")]
    Validation(&'static str),

    /// Server answered 401.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Server answered with any other non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Network failure or unreadable response.
    #[error("{0}")]
    Transport(String),
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
