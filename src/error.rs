//! Error types for mindful.

use thiserror::Error;

/// Errors that can occur while running mindful.
#[derive(Debug, Error)]
pub enum MindfulError {
    /// A terminal operation (raw mode, drawing, event polling) failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Serialization of output data failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid command-line input (e.g., an unknown preset name).
    #[error("{0}")]
    InvalidInput(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
