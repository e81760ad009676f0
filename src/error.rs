//! Error types for the skirmish engine.

use thiserror::Error;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised while setting up a match.
///
/// Once a match is running every state transition is infallible.
#[derive(Debug, Error)]
pub enum GameError {
    /// The window leaves no playable grid below the header.
    #[error("window of {width}x{height} leaves no playable map")]
    InvalidDimensions {
        /// Requested window width.
        width: u16,
        /// Requested window height.
        height: u16,
    },

    /// Terminal or log file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
