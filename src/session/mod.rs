//! Session sequencing for the pomo CLI.
//!
//! This module decides *which* interval runs next:
//! - `config`: validated session parameters and unit scaling
//! - `state`: the focus/break alternation state machine
//! - `error`: configuration rejection reasons

pub mod config;
pub mod error;
pub mod state;

pub use config::{SessionConfig, TimeUnit};
pub use error::ConfigError;
pub use state::{Interval, IntervalKind, SessionState};
