//! Desktop notification dispatch.
//!
//! Interval completions are announced through the platform notification
//! daemon. Sending is best-effort: the caller logs failures and moves
//! on, so a missing or broken daemon never stops a session.
//!
//! - `Notifier`: the seam the timer depends on
//! - `DesktopNotifier`: real implementation via `notify-rust`
//! - `MockNotifier`: test double that records what was sent

pub mod error;

pub use error::NotifyError;

use std::time::Duration;

use notify_rust::Notification;
#[cfg(all(unix, not(target_os = "macos")))]
use notify_rust::{Timeout, Urgency};
use tokio::task;
use tokio::time::timeout;

/// Maximum time to wait for the notification daemon.
const SEND_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// Notifier
// ============================================================================

/// Sends a notification when an interval finishes.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    /// Announces that the labelled interval is done.
    async fn interval_done(&self, label: &str) -> Result<(), NotifyError>;
}

// ============================================================================
// DesktopNotifier
// ============================================================================

/// Notifier backed by the desktop notification daemon.
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    async fn interval_done(&self, label: &str) -> Result<(), NotifyError> {
        let body = format!("{label} done.");

        // The daemon roundtrip is blocking, so it runs off the runtime
        // thread with a hard upper bound on how long we wait for it.
        let send = task::spawn_blocking(move || {
            let mut notification = Notification::new();
            notification.summary("pomo").body(&body);

            // High urgency, no expiry: the banner stays up until the
            // user dismisses it.
            #[cfg(all(unix, not(target_os = "macos")))]
            notification.urgency(Urgency::Critical).timeout(Timeout::Never);

            notification
                .show()
                .map(|_| ())
                .map_err(|e| NotifyError::SendFailed(e.to_string()))
        });

        match timeout(Duration::from_secs(SEND_TIMEOUT_SECS), send).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(NotifyError::SendFailed(e.to_string())),
            Err(_) => Err(NotifyError::Timeout(SEND_TIMEOUT_SECS)),
        }
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

/// Test notifier that records sent labels instead of talking to a
/// daemon.
#[derive(Debug, Default)]
pub struct MockNotifier {
    sent: std::sync::Mutex<Vec<String>>,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent send fail.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    /// Labels sent so far, in order.
    #[must_use]
    pub fn sent_labels(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Notifier for MockNotifier {
    async fn interval_done(&self, label: &str) -> Result<(), NotifyError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(NotifyError::SendFailed("mock failure".to_string()));
        }
        self.sent.lock().unwrap().push(label.to_string());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod mock_tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_records_labels_in_order() {
            let notifier = MockNotifier::new();
            notifier.interval_done("block 1").await.unwrap();
            notifier.interval_done("break 1").await.unwrap();
            notifier.interval_done("block 2").await.unwrap();

            assert_eq!(notifier.sent_labels(), vec!["block 1", "break 1", "block 2"]);
            assert_eq!(notifier.sent_count(), 3);
        }

        #[tokio::test]
        async fn test_mock_failure_records_nothing() {
            let notifier = MockNotifier::new();
            notifier.set_should_fail(true);

            let result = notifier.interval_done("block 1").await;
            assert!(result.is_err());
            assert_eq!(notifier.sent_count(), 0);
        }

        #[tokio::test]
        async fn test_mock_recovers_after_failure_cleared() {
            let notifier = MockNotifier::new();
            notifier.set_should_fail(true);
            let _ = notifier.interval_done("block 1").await;

            notifier.set_should_fail(false);
            notifier.interval_done("break 1").await.unwrap();
            assert_eq!(notifier.sent_labels(), vec!["break 1"]);
        }
    }
}
