//! Error types for studymate.

use thiserror::Error;

/// Errors that can occur across studymate.
#[derive(Debug, Error)]
pub enum StudymateError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data could not be parsed or serialized.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An app roster index was out of range.
    ///
    /// Roster indices come from rendering the roster itself, so hitting this
    /// indicates a caller bug rather than a user mistake.
    #[error("App index {index} is out of range for a roster of {len}")]
    InvalidIndex {
        /// The index that was passed.
        index: usize,
        /// The roster length at the time of the call.
        len: usize,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal could not be set up, drawn to, or restored.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl From<serde_json::Error> for StudymateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
