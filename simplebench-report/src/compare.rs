//! Fastest-run selection
//!
//! Two independent linear scans over the supplied records: one on run
//! duration, one on average call duration for records that carry it. The
//! running minimum only moves on a strictly smaller value, so the earliest
//! record wins ties.
//!
//! Run numbers are 1-based everywhere in this crate, matching the `Run <n>`
//! labels in printed reports.

use serde::Serialize;
use simplebench_core::{BenchError, Result, TimingResult, ns_to_s};

/// Which metric a [`Fastest`] entry was picked on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Whole-run duration
    Duration,
    /// Average per-call duration
    AverageCall,
}

/// Winner of one metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fastest {
    /// 1-based run number in the order the results were supplied
    pub run: usize,
    /// Label of the winning run
    pub name: String,
    /// Winning value in nanoseconds
    pub value_ns: u64,
    /// Metric the value was taken from
    pub metric: Metric,
}

impl Fastest {
    /// 0-based position of the winner in the compared slice
    pub fn index(&self) -> usize {
        self.run - 1
    }

    /// Winning value in seconds
    pub fn seconds(&self) -> f64 {
        ns_to_s(self.value_ns)
    }
}

/// Outcome of comparing a set of runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Run with the smallest duration
    pub fastest: Fastest,
    /// Run with the smallest average call duration, when any run has one
    pub fastest_average: Option<Fastest>,
    /// Number of runs compared
    pub runs: usize,
}

impl Comparison {
    /// Whether the two metrics picked different runs
    pub fn winners_disagree(&self) -> bool {
        self.fastest_average
            .as_ref()
            .is_some_and(|average| average.run != self.fastest.run)
    }
}

/// Pick the fastest run by duration and, independently, by average call time.
///
/// Fails with `InvalidArgument` for an empty slice.
pub fn compare(results: &[TimingResult]) -> Result<Comparison> {
    let fastest = min_by_metric(results, Metric::Duration, |r| Some(r.duration_ns()))
        .ok_or_else(|| {
            tracing::warn!("rejected comparison of zero runs");
            BenchError::invalid_argument("cannot compare an empty set of results")
        })?;
    let fastest_average = min_by_metric(results, Metric::AverageCall, |r| r.average_call_ns());

    tracing::debug!(
        runs = results.len(),
        fastest_run = fastest.run,
        fastest_ns = fastest.value_ns,
        fastest_average_run = ?fastest_average.as_ref().map(|f| f.run),
        "comparison complete"
    );

    Ok(Comparison {
        fastest,
        fastest_average,
        runs: results.len(),
    })
}

fn min_by_metric<F>(results: &[TimingResult], metric: Metric, value: F) -> Option<Fastest>
where
    F: Fn(&TimingResult) -> Option<u64>,
{
    let mut best: Option<(usize, u64)> = None;
    for (index, result) in results.iter().enumerate() {
        let Some(candidate) = value(result) else {
            continue;
        };
        match best {
            Some((_, current)) if candidate >= current => {}
            _ => best = Some((index, candidate)),
        }
    }

    best.map(|(index, value_ns)| Fastest {
        run: index + 1,
        name: results[index].name().to_string(),
        value_ns,
        metric,
    })
}
