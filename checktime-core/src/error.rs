//! Error types for CheckTime client operations.
//!
//! Note that [`ApiClient::submit`](crate::ApiClient::submit) never returns
//! these: every request outcome, including transport failures, is reduced to
//! an [`Outcome`](crate::Outcome). This enum covers the operations that can
//! legitimately fail before or outside a request cycle (bad base URLs,
//! translation loads).

use thiserror::Error;

/// Errors that can occur in CheckTime client operations.
#[derive(Error, Debug)]
pub enum CheckTimeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for CheckTime client operations.
pub type CheckTimeResult<T> = Result<T, CheckTimeError>;
