//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `RewardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RewardError {
    #[error("reward images are not configured")]
    Disabled,
    #[error("reward service returned no image")]
    EmptyResponse,
    #[error("reward request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the session engine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
}
