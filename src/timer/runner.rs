//! Interval countdown runner.
//!
//! Runs one interval at a time on the tokio clock:
//! - a spawned ticker task emits a cosmetic [`RunnerEvent::Tick`] once
//!   per second with the time remaining
//! - the runner itself sleeps until the deadline, which is the only
//!   authority on when the interval ends
//!
//! When the deadline passes, the ticker is stopped through a one-shot
//! signal and joined before anything else happens, so no tick can be
//! observed after the completion signal fires. Then the notifier is
//! invoked (best-effort) and [`RunnerEvent::Completed`] is emitted.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::time::{interval, sleep_until, Duration, Instant, MissedTickBehavior};

use crate::notify::Notifier;
use crate::session::Interval;

// ============================================================================
// RunnerEvent
// ============================================================================

/// Progress events emitted while an interval runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerEvent {
    /// One second of the countdown elapsed.
    Tick {
        /// Label of the running interval.
        label: String,
        /// Time left until the interval ends.
        remaining: Duration,
    },
    /// The interval reached its deadline.
    Completed {
        /// Label of the finished interval.
        label: String,
    },
}

/// Callback the runner reports progress through.
pub type EventSink = Arc<dyn Fn(RunnerEvent) + Send + Sync>;

// ============================================================================
// IntervalRunner
// ============================================================================

/// Runs single intervals to completion.
pub struct IntervalRunner<N: Notifier> {
    notifier: Arc<N>,
    sink: EventSink,
}

impl<N: Notifier> IntervalRunner<N> {
    pub fn new(notifier: Arc<N>, sink: EventSink) -> Self {
        Self { notifier, sink }
    }

    /// Runs one interval: counts down, stops the ticker, notifies, and
    /// reports completion.
    ///
    /// A notification failure is logged and swallowed; it never affects
    /// sequencing.
    pub async fn run(&self, interval: &Interval) {
        let label = interval.label();
        let deadline = Instant::now() + interval.duration;
        let (stop_tx, stop_rx) = oneshot::channel();

        let tick_task = tokio::spawn(tick_loop(
            label.clone(),
            deadline,
            Arc::clone(&self.sink),
            stop_rx,
        ));

        sleep_until(deadline).await;

        // Stop and join the ticker before signalling completion, so the
        // countdown line is final once the interval is reported done.
        let _ = stop_tx.send(());
        let _ = tick_task.await;

        if let Err(e) = self.notifier.interval_done(&label).await {
            tracing::warn!("notification failed: {e}");
        }

        (self.sink)(RunnerEvent::Completed { label });
    }
}

/// Emits a tick every second until the stop signal fires.
///
/// The first tick fires immediately, showing the full remaining time.
/// The select is biased so that a pending stop always wins over a
/// pending tick.
async fn tick_loop(
    label: String,
    deadline: Instant,
    sink: EventSink,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = &mut stop_rx => break,
            _ = ticker.tick() => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                sink(RunnerEvent::Tick {
                    label: label.clone(),
                    remaining,
                });
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
