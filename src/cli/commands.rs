//! Command definitions for the pomo CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::Parser;

/// User-visible version string, shown as `pomo v0.0.1`.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

// ============================================================================
// CLI Structure
// ============================================================================

/// pomo - a command-line Pomodoro interval timer
#[derive(Parser, Debug)]
#[command(
    name = "pomo",
    version = VERSION,
    about = "A command-line Pomodoro interval timer",
    long_about = "Alternates focus blocks and breaks for a fixed number of cycles,\n\
                  with a live countdown and a desktop notification when each\n\
                  interval ends."
)]
pub struct Cli {
    /// Number of focus blocks in the session (1-100)
    #[arg(
        short = 'x',
        long,
        default_value = "3",
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    pub blocks: u32,

    /// Focus duration per block in minutes (1-1440; seconds with --debug)
    #[arg(
        short,
        long,
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(1..=1440)
    )]
    pub focus: u32,

    /// Break duration per block in minutes (1-1440; seconds with --debug)
    #[arg(
        short = 'b',
        long = "break",
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..=1440)
    )]
    pub break_duration: u32,

    /// Interpret durations as seconds instead of minutes
    #[arg(long)]
    pub debug: bool,

    /// Generate a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

// ============================================================================
// Tests
// ============================================================================
