//! Runner - Repeated Invocation Harness
//!
//! Invokes a zero-argument closure a fixed number of times, sequentially, and
//! records the run as a [`TimingResult`]. Closures capture whatever state the
//! work needs, so there is no argument forwarding.
//!
//! Two timing modes:
//! - `Aggregate`: one clock reading before the loop and one after it
//! - `PerCall`: additionally reads the clock around every invocation and
//!   averages the accumulated deltas
//!
//! The run duration always spans the whole loop, so in `PerCall` mode it
//! includes the per-call measurement overhead. Aggregate and per-call
//! durations are not directly comparable with each other.

use crate::error::{BenchError, Result, RunError};
use crate::measure::{Instant, Timer};
use crate::result::TimingResult;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::hint::black_box;

/// How a run is timed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingMode {
    /// Time the loop as a whole
    #[default]
    Aggregate,
    /// Time the loop and every call inside it
    PerCall,
}

/// Executes benchmark closures and produces timing records.
///
/// Runs block the caller until every iteration has completed or the closure
/// fails; there is no timeout or cancellation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner {
    mode: TimingMode,
}

impl Runner {
    /// Create a runner with the given timing mode
    pub fn new(mode: TimingMode) -> Self {
        Self { mode }
    }

    /// Runner that only times the loop as a whole
    pub fn aggregate() -> Self {
        Self::new(TimingMode::Aggregate)
    }

    /// Runner that also times each call and reports the average
    pub fn per_call() -> Self {
        Self::new(TimingMode::PerCall)
    }

    /// Timing mode of this runner
    pub fn mode(&self) -> TimingMode {
        self.mode
    }

    /// Invoke `f` exactly `iterations` times and time the run.
    ///
    /// Fails with `InvalidArgument` when `iterations` is zero. A panic inside
    /// `f` unwinds through the runner and no record is produced.
    pub fn run<T, F>(
        &self,
        iterations: u64,
        label: impl Into<String>,
        mut f: F,
    ) -> Result<TimingResult>
    where
        F: FnMut() -> T,
    {
        self.try_run(iterations, label, || Ok::<T, Infallible>(f()))
            .map_err(|err| match err {
                RunError::InvalidArgument(err) => err,
                RunError::Callable(never) => match never {},
            })
    }

    /// Fallible counterpart of [`Runner::run`].
    ///
    /// The first `Err` returned by `f` stops the loop immediately and is
    /// handed back unmodified as [`RunError::Callable`]; the partial run
    /// produces no record.
    pub fn try_run<T, E, F>(
        &self,
        iterations: u64,
        label: impl Into<String>,
        mut f: F,
    ) -> Result<TimingResult, RunError<E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        let label = label.into();
        check_iterations(&label, iterations)?;

        let result = match self.mode {
            TimingMode::Aggregate => {
                let (start, end) =
                    aggregate_loop(iterations, &mut f).map_err(RunError::Callable)?;
                TimingResult::new(label, start.as_nanos(), end.as_nanos(), iterations)?
            }
            TimingMode::PerCall => {
                let (start, end, call_time_ns) =
                    per_call_loop(iterations, &mut f).map_err(RunError::Callable)?;
                TimingResult::new(label, start.as_nanos(), end.as_nanos(), iterations)?
                    .with_call_time(call_time_ns)?
            }
        };

        tracing::debug!(
            name = result.name(),
            iterations,
            duration_ns = result.duration_ns(),
            average_call_ns = ?result.average_call_ns(),
            "benchmark run complete"
        );

        Ok(result)
    }
}

/// Run `f` `iterations` times with aggregate timing
pub fn run<T, F>(iterations: u64, label: impl Into<String>, f: F) -> Result<TimingResult>
where
    F: FnMut() -> T,
{
    Runner::aggregate().run(iterations, label, f)
}

/// Run `f` `iterations` times with per-call timing
pub fn run_per_call<T, F>(iterations: u64, label: impl Into<String>, f: F) -> Result<TimingResult>
where
    F: FnMut() -> T,
{
    Runner::per_call().run(iterations, label, f)
}

fn check_iterations(label: &str, iterations: u64) -> Result<()> {
    if iterations == 0 {
        tracing::warn!(name = label, "rejected benchmark run with zero iterations");
        return Err(BenchError::invalid_argument(format!(
            "iterations must be at least 1 (run '{label}')"
        )));
    }
    Ok(())
}

/// Loop with a clock reading only at the boundaries
#[inline]
fn aggregate_loop<T, E, F>(iterations: u64, f: &mut F) -> Result<(Instant, Instant), E>
where
    F: FnMut() -> Result<T, E>,
{
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f()?);
    }
    let end = Instant::now();
    Ok((start, end))
}

/// Loop timing every call; returns the boundaries and the summed call time
#[inline]
fn per_call_loop<T, E, F>(iterations: u64, f: &mut F) -> Result<(Instant, Instant, u64), E>
where
    F: FnMut() -> Result<T, E>,
{
    let start = Instant::now();
    let mut call_time_ns = 0u64;
    for _ in 0..iterations {
        let timer = Timer::start();
        let outcome = black_box(f());
        call_time_ns = call_time_ns.saturating_add(timer.stop());
        outcome?;
    }
    let end = Instant::now();
    Ok((start, end, call_time_ns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn busy_work() -> u64 {
        let mut sum = 0u64;
        for i in 0..1000 {
            sum = sum.wrapping_add(black_box(i));
        }
        sum
    }

    #[test]
    fn test_calls_closure_exactly_n_times() {
        for mode in [TimingMode::Aggregate, TimingMode::PerCall] {
            let mut calls = 0u64;
            let result = Runner::new(mode)
                .run(250, "count", || calls += 1)
                .unwrap();

            assert_eq!(calls, 250);
            assert_eq!(result.iterations(), 250);
        }
    }

    #[test]
    fn test_duration_matches_readings() {
        let result = run(100, "sum", busy_work).unwrap();

        assert!(result.end_ns() >= result.start_ns());
        assert_eq!(result.duration_ns(), result.end_ns() - result.start_ns());
        assert!(result.average_call_ns().is_none());
        assert_eq!(result.name(), "sum");
    }

    #[test]
    fn test_duration_covers_slow_calls() {
        let result = run(3, "sleep", || std::thread::sleep(Duration::from_millis(2))).unwrap();
        assert!(result.duration() >= Duration::from_millis(6));
    }

    #[test]
    fn test_per_call_average_law() {
        let result = run_per_call(500, "sum", busy_work).unwrap();

        let average = result.average_call_ns().unwrap();
        let call_time = result.call_time_ns().unwrap();
        assert_eq!(average, call_time / 500);
        assert!(call_time <= result.duration_ns());
        assert!(average * result.iterations() <= result.duration_ns());
        assert!(average <= result.duration_ns());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        for mode in [TimingMode::Aggregate, TimingMode::PerCall] {
            let mut calls = 0u32;
            let err = Runner::new(mode).run(0, "empty", || calls += 1).unwrap_err();

            assert!(err.is_invalid_argument());
            assert_eq!(calls, 0);
        }
    }

    #[test]
    fn test_try_run_stops_at_first_failure() {
        for mode in [TimingMode::Aggregate, TimingMode::PerCall] {
            let mut calls = 0u32;
            let outcome = Runner::new(mode).try_run(5, "flaky", || {
                calls += 1;
                if calls == 3 { Err("third call failed") } else { Ok(calls) }
            });

            let err = outcome.unwrap_err();
            assert_eq!(err.into_callable(), Some("third call failed"));
            assert_eq!(calls, 3);
        }
    }

    #[test]
    fn test_try_run_success() {
        let mut calls = 0u32;
        let result = Runner::per_call()
            .try_run(4, "ok", || {
                calls += 1;
                Ok::<_, String>(calls)
            })
            .unwrap();

        assert_eq!(calls, 4);
        assert_eq!(result.iterations(), 4);
        assert!(result.average_call_ns().is_some());
    }

    #[test]
    fn test_try_run_zero_iterations() {
        let err = Runner::aggregate()
            .try_run(0, "empty", || Ok::<_, String>(()))
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_panic_propagates() {
        let mut calls = 0u32;
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            run(5, "panics", || {
                calls += 1;
                if calls == 2 {
                    panic!("boom");
                }
            })
        }));

        assert!(outcome.is_err());
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_default_mode_is_aggregate() {
        assert_eq!(Runner::default().mode(), TimingMode::Aggregate);
        assert_eq!(Runner::per_call().mode(), TimingMode::PerCall);
    }
}
