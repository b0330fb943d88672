//! Session configuration and time-unit scaling.
//!
//! A [`SessionConfig`] is validated once at construction and never
//! changes afterwards. All durations are stored as plain amounts plus a
//! [`TimeUnit`], so the same configuration logic serves both normal
//! (minutes) and debug (seconds) sessions.

use std::time::Duration;

use crate::session::error::ConfigError;

// ============================================================================
// TimeUnit
// ============================================================================

/// The unit used to interpret configured duration amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Normal operation: amounts are minutes.
    Minutes,
    /// Debug operation: amounts are seconds.
    Seconds,
}

impl TimeUnit {
    /// Scales an amount in this unit to a wall-clock duration.
    #[must_use]
    pub fn scale(&self, amount: u32) -> Duration {
        match self {
            Self::Minutes => Duration::from_secs(u64::from(amount) * 60),
            Self::Seconds => Duration::from_secs(u64::from(amount)),
        }
    }

    /// The unit word used in user-facing output.
    #[must_use]
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

// ============================================================================
// SessionConfig
// ============================================================================

/// Immutable configuration for a pomo session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of focus blocks in the session, at least 1.
    pub blocks: u32,
    /// Length of each focus block, in `unit`.
    pub focus_duration: u32,
    /// Length of each break, in `unit`.
    pub break_duration: u32,
    /// Unit the duration amounts are expressed in.
    pub unit: TimeUnit,
}

impl SessionConfig {
    /// Creates a validated session configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the block count or either duration
    /// is zero.
    pub fn new(
        blocks: u32,
        focus_duration: u32,
        break_duration: u32,
        unit: TimeUnit,
    ) -> Result<Self, ConfigError> {
        if blocks == 0 {
            return Err(ConfigError::InvalidBlockCount(blocks));
        }
        if focus_duration == 0 {
            return Err(ConfigError::InvalidFocusDuration(focus_duration));
        }
        if break_duration == 0 {
            return Err(ConfigError::InvalidBreakDuration(break_duration));
        }

        Ok(Self {
            blocks,
            focus_duration,
            break_duration,
            unit,
        })
    }

    /// Wall-clock length of one focus block.
    #[must_use]
    pub fn focus_len(&self) -> Duration {
        self.unit.scale(self.focus_duration)
    }

    /// Wall-clock length of one break.
    #[must_use]
    pub fn break_len(&self) -> Duration {
        self.unit.scale(self.break_duration)
    }

    /// Total projected session length: every focus block plus the
    /// breaks between consecutive blocks. The session ends on a focus
    /// block, so there is one break fewer than there are blocks.
    #[must_use]
    pub fn projected_total(&self) -> Duration {
        self.focus_len()
            .saturating_mul(self.blocks)
            .saturating_add(self.break_len().saturating_mul(self.blocks - 1))
    }

    /// Time from session start until the next focus block begins:
    /// the first block plus, when one follows, the break after it.
    #[must_use]
    pub fn first_block_done_in(&self) -> Duration {
        if self.blocks > 1 {
            self.focus_len().saturating_add(self.break_len())
        } else {
            self.focus_len()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
