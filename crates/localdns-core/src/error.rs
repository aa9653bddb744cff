//! Error types for the Local DNS console
//!
//! Every remote failure is normalized into a single [`ApiError`] value by the
//! remote client. Layers above the client carry that value upward inside
//! [`Error::Remote`] without rewriting it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for remote API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Classification of a remote failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    /// The remote answered with a non-2xx status
    #[serde(rename = "HTTPError")]
    Http,
    /// The connection could not be established
    #[serde(rename = "ConnectionError")]
    Connection,
    /// The request did not complete in time
    #[serde(rename = "TimeoutError")]
    Timeout,
    /// Any other transport or decoding failure
    #[serde(rename = "RequestException")]
    Request,
}

impl ApiErrorKind {
    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorKind::Http => "HTTPError",
            ApiErrorKind::Connection => "ConnectionError",
            ApiErrorKind::Timeout => "TimeoutError",
            ApiErrorKind::Request => "RequestException",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized remote failure
///
/// Produced by the remote client for every failure path. `status_code` is only
/// present for [`ApiErrorKind::Http`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Failure classification
    #[serde(rename = "error")]
    pub kind: ApiErrorKind,

    /// Response body for HTTP errors, transport message otherwise
    pub details: String,

    /// HTTP status, when the remote answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ApiError {
    /// The remote rejected the request
    pub fn http(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            details: body.into(),
            status_code: Some(status_code),
        }
    }

    /// The connection could not be established
    pub fn connection(msg: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Connection,
            details: msg.into(),
            status_code: None,
        }
    }

    /// The request timed out
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Timeout,
            details: msg.into(),
            status_code: None,
        }
    }

    /// Catch-all transport or decoding failure
    pub fn request(msg: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Request,
            details: msg.into(),
            status_code: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(status) => write!(f, "Error {} - {}: {}", status, self.kind, self.details),
            None => write!(f, "Error Unknown - {}: {}", self.kind, self.details),
        }
    }
}

impl std::error::Error for ApiError {}

/// Core error type for the console
#[derive(Error, Debug)]
pub enum Error {
    /// Normalized failure reported by the remote client
    #[error(transparent)]
    Remote(#[from] ApiError),

    /// An organization-scoped call was made before any organization was selected
    #[error("No organization selected")]
    NoOrganizationSelected,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// The normalized remote failure, if this error came from the remote API
    pub fn as_remote(&self) -> Option<&ApiError> {
        match self {
            Error::Remote(err) => Some(err),
            _ => None,
        }
    }
}
