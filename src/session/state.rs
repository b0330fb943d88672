//! Session state machine.
//!
//! A session alternates focus blocks and breaks, always starting and
//! ending on a focus block: `block 1, break 1, block 2, ..., block N`.
//! [`SessionState`] is an immutable value; finishing an interval
//! produces the next state via [`SessionState::advanced`] instead of
//! mutating in place.

use std::time::Duration;

use crate::session::config::SessionConfig;

// ============================================================================
// SessionState
// ============================================================================

/// Position within a running session.
///
/// `current_block` is 1-based and moves past `config.blocks` once the
/// final focus block has finished; that is the terminal state.
/// `current_break` stays 0 until the first break starts. The remaining
/// counters count intervals still ahead of the one about to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Whether the interval about to run (or running) is a break.
    pub is_break: bool,
    /// Ordinal of the current focus block.
    pub current_block: u32,
    /// Ordinal of the current break, 0 before the first break.
    pub current_break: u32,
    /// Focus blocks left after the current one.
    pub remaining_blocks: u32,
    /// Breaks left after the current position.
    pub remaining_breaks: u32,
}

impl SessionState {
    /// The state a fresh session starts in: about to run block 1.
    #[must_use]
    pub fn initial(config: &SessionConfig) -> Self {
        Self {
            is_break: false,
            current_block: 1,
            current_break: 0,
            remaining_blocks: config.blocks - 1,
            remaining_breaks: config.blocks - 1,
        }
    }

    /// Whether every interval of the session has finished.
    #[must_use]
    pub fn is_complete(&self, config: &SessionConfig) -> bool {
        self.current_block > config.blocks
    }

    /// The state after the current interval finishes.
    ///
    /// Finishing the final focus block moves straight to the terminal
    /// state; there is no trailing break. Advancing a terminal state is
    /// the identity.
    #[must_use]
    pub fn advanced(&self, config: &SessionConfig) -> Self {
        if self.is_complete(config) {
            return *self;
        }

        let mut next = *self;
        if self.is_break {
            next.is_break = false;
            next.current_block += 1;
            next.remaining_blocks -= 1;
        } else if self.current_block == config.blocks {
            next.current_block += 1;
        } else {
            next.is_break = true;
            next.current_break += 1;
            next.remaining_breaks -= 1;
        }
        next
    }

    /// The interval this state is about to run.
    ///
    /// Only meaningful while the session is incomplete; the driver
    /// checks [`Self::is_complete`] before asking.
    #[must_use]
    pub fn current_interval(&self, config: &SessionConfig) -> Interval {
        if self.is_break {
            Interval {
                kind: IntervalKind::Break,
                ordinal: self.current_break,
                duration: config.break_len(),
            }
        } else {
            Interval {
                kind: IntervalKind::Focus,
                ordinal: self.current_block,
                duration: config.focus_len(),
            }
        }
    }
}

// ============================================================================
// Interval
// ============================================================================

/// The two kinds of interval a session alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    /// A focus block.
    Focus,
    /// A break between focus blocks.
    Break,
}

/// A single timed interval, derived from the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    /// Focus block or break.
    pub kind: IntervalKind,
    /// 1-based position among intervals of the same kind.
    pub ordinal: u32,
    /// Wall-clock length.
    pub duration: Duration,
}

impl Interval {
    /// User-facing label, e.g. `block 2` or `break 1`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.kind {
            IntervalKind::Focus => format!("block {}", self.ordinal),
            IntervalKind::Break => format!("break {}", self.ordinal),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
