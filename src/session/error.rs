//! Session configuration error types.

use thiserror::Error;

/// Errors raised when a session configuration is rejected.
///
/// All variants carry the offending value so the message can show
/// exactly what was passed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The session must contain at least one focus block.
    #[error("block count must be at least 1 (got {0})")]
    InvalidBlockCount(u32),

    /// Focus blocks must have a positive length.
    #[error("focus duration must be at least 1 (got {0})")]
    InvalidFocusDuration(u32),

    /// Breaks must have a positive length.
    #[error("break duration must be at least 1 (got {0})")]
    InvalidBreakDuration(u32),
}
