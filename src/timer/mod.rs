//! Interval timing for the pomo CLI.
//!
//! This module decides *when* intervals end:
//! - `runner`: countdown and completion of a single interval
//! - `driver`: the serial loop over a whole session

pub mod driver;
pub mod runner;

pub use driver::SessionDriver;
pub use runner::{EventSink, IntervalRunner, RunnerEvent};
