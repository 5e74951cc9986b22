//! Error types for whatidid.
//!
//! The analyzer itself is total and never returns these; they cover the
//! configuration, I/O and presentation layers around it.

use thiserror::Error;

/// Errors raised outside the analysis core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command-line value could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A staged analysis was cancelled before it produced a result.
    #[error("Analysis cancelled")]
    Cancelled,
}

impl AppError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 2,
            Self::Cancelled => 130,
            Self::Config(_) | Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
