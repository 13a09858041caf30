//! Error Types
//!
//! Failure taxonomy shared by the controllers. User-facing texts live here
//! so every view reports the same wording.

use thiserror::Error;

pub const INVALID_PASSWORD_MESSAGE: &str = "Invalid password. Please try again.";
pub const CONNECT_FAILED_MESSAGE: &str = "Failed to connect to server. Please try again.";
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch dashboard data. Make sure the backend is running.";
pub const REFRESH_FAILED_MESSAGE: &str = "Failed to trigger refresh";

/// Transport-level failure of a backend call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),

    /// No browser window (or fetch) to send the request with
    #[error("HTTP transport unavailable")]
    Unavailable,
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("browser storage unavailable")]
    Unavailable,

    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Outcome of a rejected login submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error("password is empty")]
    EmptyPassword,

    #[error("a login request is already in flight")]
    InFlight,

    #[error("backend rejected the password")]
    InvalidPassword,

    #[error(transparent)]
    Transport(#[from] ApiError),
}

impl LoginError {
    /// Inline text for the login form, if this failure is shown at all.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            LoginError::InvalidPassword => Some(INVALID_PASSWORD_MESSAGE),
            LoginError::Transport(_) => Some(CONNECT_FAILED_MESSAGE),
            LoginError::EmptyPassword | LoginError::InFlight => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RefreshError {
    #[error("a refresh is already running")]
    InFlight,

    #[error("backend declined the refresh: {0}")]
    Declined(String),

    #[error(transparent)]
    Trigger(#[from] ApiError),
}
