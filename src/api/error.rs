//! Error types for fetching posts from the remote API.
//!
//! Provides structured error classification with a copyable kind tag so
//! the store can keep the kind next to the display message.

use thiserror::Error;

/// Message carried by every non-2xx response, regardless of status or body.
pub const NETWORK_ERROR_MESSAGE: &str = "Network response was not ok";

/// Errors that can occur while fetching posts.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream answered with a non-2xx status.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network,

    /// The request could not be sent or the response could not be received.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not valid JSON or not an array of posts.
    #[error("{0}")]
    Parse(#[source] serde_json::Error),
}

/// Kind of a [`FetchError`], without the underlying source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    Network,
    Transport,
    Parse,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network => FetchErrorKind::Network,
            FetchError::Transport(_) => FetchErrorKind::Transport,
            FetchError::Parse(_) => FetchErrorKind::Parse,
        }
    }
}

impl FetchErrorKind {
    /// Get error type string for log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Network => "network_error",
            FetchErrorKind::Transport => "transport_error",
            FetchErrorKind::Parse => "parse_error",
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err)
    }
}
