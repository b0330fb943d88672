//! CLI module for the pomo timer.
//!
//! This module provides the command-line interface:
//! - `commands`: flag definitions using clap derive
//! - `display`: output formatting and the countdown line

pub mod commands;
pub mod display;

pub use commands::{Cli, VERSION};
pub use display::Display;
