#![warn(missing_docs)]
//! Simplebench Core - Timing Harness
//!
//! This crate provides the measuring half of simplebench:
//! - [`Runner`] invoking a closure a fixed number of times
//! - Monotonic timing with nanosecond readings
//! - [`TimingResult`] records, immutable once produced
//! - Unit conversion and seconds rendering shared with the reporter

mod config;
mod error;
mod measure;
mod result;
mod runner;
mod units;

pub use config::BenchConfig;
pub use error::{BenchError, Result, RunError};
pub use measure::{Instant, Timer};
pub use result::TimingResult;
pub use runner::{Runner, TimingMode, run, run_per_call};
pub use units::{NANOS_PER_SECOND, format_seconds, ns_to_s};
