//! Integration tests driving full sessions on a paused tokio clock.
//!
//! These tests wire the real driver and runner to a `MockNotifier` and
//! a recording event sink, then fast-forward through whole sessions:
//! - interval ordering and notification order
//! - event stream shape (ticks never outlive their interval)
//! - resilience to notification failures
//! - total session length

use std::sync::{Arc, Mutex};

use tokio::time::Instant;

use pomo::{
    EventSink, IntervalRunner, MockNotifier, RunnerEvent, SessionConfig, SessionDriver, TimeUnit,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Builds a sink that appends every event to a shared log.
fn recording_sink() -> (EventSink, Arc<Mutex<Vec<RunnerEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&events);
    let sink: EventSink = Arc::new(move |event| {
        recorded.lock().unwrap().push(event);
    });
    (sink, events)
}

fn seconds_config(blocks: u32, focus: u32, break_duration: u32) -> SessionConfig {
    SessionConfig::new(blocks, focus, break_duration, TimeUnit::Seconds).unwrap()
}

// ============================================================================
// Session Ordering
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_three_block_session_notifies_every_interval_in_order() {
    let config = seconds_config(3, 2, 1);
    let notifier = Arc::new(MockNotifier::new());
    let (sink, _) = recording_sink();
    let driver = SessionDriver::new(config, IntervalRunner::new(Arc::clone(&notifier), sink));

    let final_state = driver.run().await;

    assert!(final_state.is_complete(&config));
    assert_eq!(
        notifier.sent_labels(),
        vec!["block 1", "break 1", "block 2", "break 2", "block 3"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_single_block_session_has_no_breaks() {
    let config = seconds_config(1, 3, 1);
    let notifier = Arc::new(MockNotifier::new());
    let (sink, _) = recording_sink();
    let driver = SessionDriver::new(config, IntervalRunner::new(Arc::clone(&notifier), sink));

    driver.run().await;

    assert_eq!(notifier.sent_labels(), vec!["block 1"]);
}

// ============================================================================
// Event Stream Shape
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_ticks_stay_within_their_interval() {
    let config = seconds_config(3, 2, 1);
    let notifier = Arc::new(MockNotifier::new());
    let (sink, events) = recording_sink();
    let driver = SessionDriver::new(config, IntervalRunner::new(notifier, sink));

    driver.run().await;

    let events = events.lock().unwrap().clone();
    let mut completed = Vec::new();
    let mut pending_ticks: Vec<String> = Vec::new();

    for event in &events {
        match event {
            RunnerEvent::Tick { label, .. } => pending_ticks.push(label.clone()),
            RunnerEvent::Completed { label } => {
                assert!(
                    pending_ticks.iter().all(|l| l == label),
                    "tick from another interval before {label} completed"
                );
                pending_ticks.clear();
                completed.push(label.clone());
            }
        }
    }

    assert!(pending_ticks.is_empty(), "ticks after the last completion");
    assert_eq!(
        completed,
        vec!["block 1", "break 1", "block 2", "break 2", "block 3"]
    );
}

// ============================================================================
// Notification Resilience
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_notification_failures_do_not_stop_the_session() {
    let config = seconds_config(2, 1, 1);
    let notifier = Arc::new(MockNotifier::new());
    notifier.set_should_fail(true);
    let (sink, events) = recording_sink();
    let driver = SessionDriver::new(config, IntervalRunner::new(Arc::clone(&notifier), sink));

    let final_state = driver.run().await;

    assert!(final_state.is_complete(&config));
    assert_eq!(notifier.sent_count(), 0);

    let completions = events
        .lock()
        .unwrap()
        .iter()
        .filter(|e| matches!(e, RunnerEvent::Completed { .. }))
        .count();
    assert_eq!(completions, 3);
}

// ============================================================================
// Session Length
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_session_takes_exactly_the_projected_time() {
    let config = seconds_config(3, 2, 1);
    let notifier = Arc::new(MockNotifier::new());
    let (sink, _) = recording_sink();
    let driver = SessionDriver::new(config, IntervalRunner::new(notifier, sink));

    let start = Instant::now();
    driver.run().await;

    // 3 blocks of 2s plus 2 breaks of 1s.
    assert_eq!(start.elapsed(), config.projected_total());
}
