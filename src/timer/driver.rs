//! Session driver loop.
//!
//! Runs the intervals of a session strictly one after another until the
//! state machine reports completion.

use crate::notify::Notifier;
use crate::session::{SessionConfig, SessionState};
use crate::timer::runner::IntervalRunner;

/// Drives a whole session through its interval sequence.
pub struct SessionDriver<N: Notifier> {
    config: SessionConfig,
    runner: IntervalRunner<N>,
}

impl<N: Notifier> SessionDriver<N> {
    pub fn new(config: SessionConfig, runner: IntervalRunner<N>) -> Self {
        Self { config, runner }
    }

    /// Runs every interval of the session and returns the terminal
    /// state. Never runs anything past the final focus block.
    pub async fn run(&self) -> SessionState {
        let mut state = SessionState::initial(&self.config);

        while !state.is_complete(&self.config) {
            self.runner.run(&state.current_interval(&self.config)).await;
            state = state.advanced(&self.config);
        }

        state
    }
}

// ============================================================================
// Tests
// ============================================================================
