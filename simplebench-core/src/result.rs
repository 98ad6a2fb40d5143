//! Timing Records
//!
//! A [`TimingResult`] is produced once per run and never changes afterwards.
//! Fields are private so that `duration_ns == end_ns - start_ns` and the
//! average-call bounds hold for every record in existence.

use crate::error::{BenchError, Result};
use crate::units::{format_seconds, ns_to_s};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Result of one benchmark run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingResult {
    name: String,
    start_ns: u64,
    end_ns: u64,
    duration_ns: u64,
    iterations: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    average_call_ns: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    call_time_ns: Option<u64>,
}

impl TimingResult {
    /// Build a record from two monotonic readings.
    ///
    /// Fails with `InvalidArgument` when `end_ns < start_ns` or when
    /// `iterations` is zero.
    pub fn new(
        name: impl Into<String>,
        start_ns: u64,
        end_ns: u64,
        iterations: u64,
    ) -> Result<Self> {
        if end_ns < start_ns {
            return Err(BenchError::invalid_argument(format!(
                "end ({end_ns}ns) precedes start ({start_ns}ns)"
            )));
        }
        if iterations == 0 {
            return Err(BenchError::invalid_argument(
                "iterations must be at least 1",
            ));
        }

        Ok(Self {
            name: name.into(),
            start_ns,
            end_ns,
            duration_ns: end_ns - start_ns,
            iterations,
            average_call_ns: None,
            call_time_ns: None,
        })
    }

    /// Attach the accumulated per-call time and derive the average call duration.
    ///
    /// The average is `call_time_ns / iterations` with truncating integer
    /// division. Fails with `InvalidArgument` if the per-call total exceeds
    /// the run duration.
    pub fn with_call_time(mut self, call_time_ns: u64) -> Result<Self> {
        if call_time_ns > self.duration_ns {
            return Err(BenchError::invalid_argument(format!(
                "per-call time ({call_time_ns}ns) exceeds run duration ({}ns)",
                self.duration_ns
            )));
        }
        self.call_time_ns = Some(call_time_ns);
        self.average_call_ns = Some(call_time_ns / self.iterations);
        Ok(self)
    }

    /// Caller-supplied label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Monotonic reading at run start (nanoseconds)
    pub fn start_ns(&self) -> u64 {
        self.start_ns
    }

    /// Monotonic reading at run end (nanoseconds)
    pub fn end_ns(&self) -> u64 {
        self.end_ns
    }

    /// `end_ns - start_ns`
    pub fn duration_ns(&self) -> u64 {
        self.duration_ns
    }

    /// Number of invocations in the run
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Truncated average per-call duration, present for per-call runs
    pub fn average_call_ns(&self) -> Option<u64> {
        self.average_call_ns
    }

    /// Sum of the individually timed calls, present for per-call runs
    pub fn call_time_ns(&self) -> Option<u64> {
        self.call_time_ns
    }

    /// Untruncated average per-call duration in nanoseconds
    pub fn precise_average_call_ns(&self) -> Option<f64> {
        self.call_time_ns
            .map(|total| total as f64 / self.iterations as f64)
    }

    /// Run duration as a [`Duration`]
    pub fn duration(&self) -> Duration {
        Duration::from_nanos(self.duration_ns)
    }

    /// Run duration in seconds
    pub fn duration_secs(&self) -> f64 {
        ns_to_s(self.duration_ns)
    }

    /// Average call duration in seconds
    pub fn average_call_secs(&self) -> Option<f64> {
        self.average_call_ns.map(ns_to_s)
    }
}

impl fmt::Display for TimingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Task name: {}", self.name)?;
        writeln!(f, "Start: {}ns", self.start_ns)?;
        writeln!(f, "End: {}ns", self.end_ns)?;
        writeln!(f, "Duration (ns): {}", self.duration_ns)?;
        writeln!(f, "Duration (s): {}", format_seconds(self.duration_secs()))?;
        if let Some(average) = self.average_call_ns {
            writeln!(f, "Average call (ns): {}", average)?;
            writeln!(f, "Average call (s): {}", format_seconds(ns_to_s(average)))?;
        }
        Ok(())
    }
}
