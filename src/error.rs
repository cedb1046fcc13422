//! Error types for pr-milestone

use thiserror::Error;

/// Errors that can abort a milestone run
#[derive(Debug, Error)]
pub enum Error {
    /// Triggered by the wrong event or sub-action
    #[error("Invalid event. Expected '{expected}', got '{actual}'")]
    InvalidEvent {
        /// Expected event (e.g. `pull_request.closed`)
        expected: String,
        /// Event that actually triggered the run
        actual: String,
    },

    /// Missing or malformed configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Event payload could not be read or lacks a required field
    #[error("event payload error: {0}")]
    EventPayload(String),

    /// GitHub API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Generic platform error
    #[error("platform error: {0}")]
    Platform(String),

    /// Octocrab (GitHub client) error
    #[error("GitHub API error: {0}")]
    Octocrab(#[from] octocrab::Error),
}

/// Result type alias for pr-milestone
pub type Result<T> = std::result::Result<T, Error>;
