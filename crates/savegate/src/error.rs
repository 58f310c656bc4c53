//! Error types for Savegate.
//!
//! The dialog itself has no fallible operations; errors come from loading
//! configuration and from asking the window host to do something it cannot.

use std::path::PathBuf;

use crate::window::WindowId;

/// Result type alias for Savegate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the dialog's own state machine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("Failed to read dialog config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for [`DialogConfig`](crate::DialogConfig).
    #[error("Failed to parse dialog config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("Invalid value for config field '{field}': {message}")]
    InvalidConfig { field: &'static str, message: String },

    /// The window ID is unknown to the host (never created, or closed).
    #[error("Unknown window {0:?}")]
    UnknownWindow(WindowId),

    /// An exclusive dialog blocks input to the window.
    #[error("Window {0:?} is blocked by an exclusive dialog")]
    WindowBlocked(WindowId),
}

impl Error {
    /// Create an invalid-config error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}
