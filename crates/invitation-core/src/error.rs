//! Error types for the concert invitation

use thiserror::Error;

/// Main error type for invitation operations
#[derive(Error, Debug)]
pub enum InvitationError {
    /// The media element refused to start playback
    #[error("Playback error: {0}")]
    Playback(String),

    /// The media bridge is gone (UI torn down or never attached)
    #[error("Media element detached")]
    MediaDetached,

    /// A track catalog must contain at least one track
    #[error("Track catalog is empty")]
    EmptyCatalog,

    /// Configuration was parsed but holds unusable values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for `InvitationConfig`
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using InvitationError
pub type InvitationResult<T> = Result<T, InvitationError>;
