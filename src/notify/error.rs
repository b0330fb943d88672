//! Notification dispatch error types.

use thiserror::Error;

/// Errors that can occur while sending a desktop notification.
///
/// These are always recovered from: a failed notification is logged
/// and the session keeps running.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The notification daemon rejected the request or is unreachable.
    #[error("failed to send notification: {0}")]
    SendFailed(String),

    /// The notification daemon did not respond in time.
    #[error("notification timed out after {0}s")]
    Timeout(u64),
}

impl NotifyError {
    /// Returns true if the daemon was reachable but too slow.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
