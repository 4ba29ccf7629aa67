//! Error taxonomy shared by every repository operation.
//!
//! All failures that reach the user are one of these kinds. The CLI prints
//! the message and exits 0, so the message text is the whole contract;
//! the kind exists so callers and tests can match on it without parsing
//! strings.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    /// Operation attempted before `init`, or `init` over an existing repository.
    #[error("{0}")]
    State(String),
    /// Malformed input: empty commit message, nothing staged, duplicate branch name.
    #[error("{0}")]
    Validation(String),
    /// Unknown commit digest, unknown branch, or a path the referenced commit does not track.
    #[error("{0}")]
    NotFound(String),
    /// Checkout/reset would silently overwrite an untracked working file.
    #[error("{0}")]
    Conflict(String),
}

impl RepoError {
    pub fn state(message: impl Into<String>) -> anyhow::Error {
        Self::State(message.into()).into()
    }

    pub fn validation(message: impl Into<String>) -> anyhow::Error {
        Self::Validation(message.into()).into()
    }

    pub fn not_found(message: impl Into<String>) -> anyhow::Error {
        Self::NotFound(message.into()).into()
    }

    pub fn conflict(message: impl Into<String>) -> anyhow::Error {
        Self::Conflict(message.into()).into()
    }
}
