//! pomo - a command-line Pomodoro interval timer.
//!
//! This library provides the pieces the `pomo` binary is assembled
//! from:
//! - Session sequencing: the focus/break alternation state machine
//! - Interval timing: per-interval countdown on the tokio clock
//! - Desktop notification dispatch (best-effort)
//! - CLI parsing and terminal display

pub mod cli;
pub mod notify;
pub mod session;
pub mod timer;

// Re-export commonly used types for convenience
pub use notify::{DesktopNotifier, MockNotifier, Notifier, NotifyError};
pub use session::{ConfigError, Interval, IntervalKind, SessionConfig, SessionState, TimeUnit};
pub use timer::{EventSink, IntervalRunner, RunnerEvent, SessionDriver};
