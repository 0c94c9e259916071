//! Error types for the cmdfire system

use thiserror::Error;

/// Core error type for registry and dispatch operations
#[derive(Error, Debug)]
pub enum CmdFireError {
    /// A command with the same identifier is already registered
    #[error("Duplicate command identifier: {0}")]
    DuplicateIdentifier(String),

    /// A command's display name collides with an existing identifier or name
    #[error("Command name '{name}' of '{identifier}' clashes with registered command '{existing}'")]
    NameClash {
        identifier: String,
        name: String,
        existing: String,
    },

    /// A command handler reported a failure
    #[error("Command '{identifier}' failed: {source}")]
    Handler {
        identifier: String,
        #[source]
        source: anyhow::Error,
    },

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors, usually while writing to the output sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for cmdfire operations
pub type Result<T> = std::result::Result<T, CmdFireError>;

impl From<serde_json::Error> for CmdFireError {
    fn from(err: serde_json::Error) -> Self {
        CmdFireError::Serialization(err.to_string())
    }
}
