//! # Common Error Types
//!
//! Consolidated error handling for backend communication.
//!
//! Every failure a gateway call can produce is folded into [`ApiError`].
//! The variants follow the backend's status-code taxonomy so callers can
//! branch on the failure class, while the `Display` output of each variant
//! is a human-readable message a form can render inline without further
//! translation.
//!
//! ## Taxonomy
//!
//! - **Network**: transport failure before any HTTP status arrived
//!   (connection refused, timeout, DNS)
//! - **Validation**: HTTP 400; carries the server's `detail` string verbatim
//! - **Unauthenticated**: HTTP 401; no valid session credential
//! - **NotFound**: HTTP 404; e.g. an unlisted ticker
//! - **RateLimited**: HTTP 429; observed only on the company-search endpoint
//! - **Server**: 5xx or any status with no dedicated variant
//! - **Decode**: the response body did not match the expected shape
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use client::core::error::{ApiError, Result};
//!
//! fn require_ticker(ticker: &str) -> Result<&str> {
//!     if ticker.is_empty() {
//!         return Err(ApiError::Validation("Ticker is required".to_string()));
//!     }
//!     Ok(ticker)
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for backend API calls.
///
/// Gateway operations never retry; every failure is surfaced once, as one
/// of these variants, with a display-ready message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Transport-level failure: the request never produced an HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP 400. The message is the server-provided detail string, passed
    /// through untranslated so the user sees what the backend said.
    #[error("{0}")]
    Validation(String),

    /// HTTP 401. The ambient session credential is missing or expired.
    #[error("Not authenticated: {0}")]
    Unauthenticated(String),

    /// HTTP 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP 429. The search UI switches to ticker-only entry on this.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// 5xx or any unmapped status.
    #[error("Server error: {0}")]
    Server(String),

    /// The response body could not be decoded into the expected DTO.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status and the server's error detail into
    /// the matching variant.
    pub fn from_status(status: StatusCode, detail: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => ApiError::Validation(detail),
            StatusCode::UNAUTHORIZED => ApiError::Unauthenticated(detail),
            StatusCode::NOT_FOUND => ApiError::NotFound(detail),
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited(detail),
            _ => ApiError::Server(detail),
        }
    }

    /// True for failures that mean the session credential is no longer
    /// valid, which the session store treats as a forced logout signal.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthenticated(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
