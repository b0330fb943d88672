//! Terminal output for the pomo CLI.
//!
//! Everything the user sees on stdout goes through here:
//! - the startup banner and schedule header
//! - the in-place countdown line (`\r` overdraw, never scrolls)
//! - interval and session completion lines
//!
//! Indentation is two spaces per level. Line builders are kept separate
//! from the printing so the exact text can be unit tested.

use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::session::{SessionConfig, SessionState};

/// ANSI tomato shown at startup.
const BANNER: &str = include_str!("banner.ansi");

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Prints the startup banner followed by a blank line.
    pub fn show_banner() {
        print!("{BANNER}");
        println!();
    }

    /// Prints the debug-mode notice.
    pub fn show_debug_notice() {
        println!("{}DEBUG: true", indent(1));
    }

    /// Prints the schedule header: start time, configuration summary,
    /// and the projected completion times.
    pub fn show_schedule(config: &SessionConfig, state: &SessionState, now: DateTime<Local>) {
        for line in Self::schedule_lines(config, state, now) {
            if line.is_empty() {
                println!();
            } else {
                println!("{}{}", indent(2), line);
            }
        }
        println!();
    }

    /// Redraws the countdown line in place.
    pub fn show_countdown(label: &str, remaining: Duration) {
        print!("\r{}{}: {}", indent(2), label, format_hms(remaining));
        let _ = io::stdout().flush();
    }

    /// Ends the countdown line and leaves a blank line before whatever
    /// comes next.
    pub fn show_interval_done() {
        println!();
        println!();
    }

    /// Prints the end-of-session line.
    pub fn show_finished() {
        println!("{}pomo finished.", indent(1));
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {message}");
    }

    /// Builds the schedule header lines. An empty string marks a blank
    /// separator line.
    fn schedule_lines(
        config: &SessionConfig,
        state: &SessionState,
        now: DateTime<Local>,
    ) -> Vec<String> {
        let mut lines = vec![
            format!("started pomo at: {}", now.format("%Y-%m-%d %H:%M:%S")),
            Self::config_line(config, state),
            String::new(),
        ];

        if state.remaining_blocks > 1 {
            let first_done = now + config.first_block_done_in();
            lines.push(format!(
                "first block is done at: {}",
                first_done.format("%H:%M:%S")
            ));
        }
        if state.remaining_blocks > 0 || state.remaining_breaks > 0 {
            lines.push(format!(
                "remaining: {} blocks, {} breaks.",
                state.remaining_blocks, state.remaining_breaks
            ));
        }

        let session_done = now + config.projected_total();
        lines.push(format!(
            "pomo session is done at: {}.",
            session_done.format("%H:%M:%S")
        ));
        lines
    }

    /// Builds the configuration summary line. Single-block sessions
    /// have no breaks, so the break clause is dropped.
    fn config_line(config: &SessionConfig, state: &SessionState) -> String {
        let mut line = format!(
            "config: {} {} of {} {} focus",
            config.blocks,
            block_noun(state.remaining_blocks),
            config.focus_duration,
            config.unit.noun(),
        );
        if config.blocks > 1 {
            line.push_str(&format!(
                " and {} {} break.",
                config.break_duration,
                config.unit.noun()
            ));
        } else {
            line.push('.');
        }
        line
    }
}

// ============================================================================
// Formatting Helpers
// ============================================================================

/// Indentation prefix for the given level, two spaces per level.
fn indent(level: usize) -> String {
    "  ".repeat(level)
}

/// Formats a duration as zero-padded `HH:MM:SS`. The hours field grows
/// past two digits rather than wrapping.
fn format_hms(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

// TODO: pluralise off the configured block count instead of the
// remaining count, so two-block sessions read "2 blocks".
fn block_noun(remaining_blocks: u32) -> &'static str {
    if remaining_blocks > 1 {
        "blocks"
    } else {
        "block"
    }
}

// ============================================================================
// Tests
// ============================================================================
