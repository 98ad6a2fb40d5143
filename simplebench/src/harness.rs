//! Run-and-report harness
//!
//! Ties a [`Runner`] to a [`Presenter`]: every completed run is printed as
//! soon as it finishes, and comparisons print the full block. Both halves
//! can be muted through [`BenchConfig`].

use simplebench_core::{BenchConfig, Result, RunError, Runner, TimingResult};
use simplebench_report::{Comparison, NullSink, OutputSink, Presenter, StdoutSink, compare};

/// Benchmark harness printing to an [`OutputSink`]
#[derive(Debug)]
pub struct Simplebench<S = StdoutSink> {
    config: BenchConfig,
    runner: Runner,
    presenter: Presenter<S>,
}

impl Simplebench<StdoutSink> {
    /// Harness with default configuration printing to standard output
    pub fn new() -> Self {
        Self::with_config(BenchConfig::default())
    }

    /// Harness printing to standard output
    pub fn with_config(config: BenchConfig) -> Self {
        Self::with_sink(config, StdoutSink)
    }
}

impl Default for Simplebench<StdoutSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl Simplebench<NullSink> {
    /// Harness that measures and compares without printing anything
    pub fn silent(config: BenchConfig) -> Self {
        Self::with_sink(config, NullSink)
    }
}

impl<S: OutputSink> Simplebench<S> {
    /// Harness printing to `sink`
    pub fn with_sink(config: BenchConfig, sink: S) -> Self {
        Self {
            runner: config.runner(),
            presenter: Presenter::new(sink),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run `f` `iterations` times, print the run, and return its record
    pub fn bench<T, F>(
        &mut self,
        iterations: u64,
        label: impl Into<String>,
        f: F,
    ) -> Result<TimingResult>
    where
        F: FnMut() -> T,
    {
        let result = self.runner.run(iterations, label, f)?;
        self.present_run(&result);
        Ok(result)
    }

    /// Fallible counterpart of [`Simplebench::bench`]; a failed run prints nothing
    pub fn try_bench<T, E, F>(
        &mut self,
        iterations: u64,
        label: impl Into<String>,
        f: F,
    ) -> Result<TimingResult, RunError<E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        let result = self.runner.try_run(iterations, label, f)?;
        self.present_run(&result);
        Ok(result)
    }

    /// Compare `results`, print the comparison block, and return the winners
    pub fn compare(&mut self, results: &[TimingResult]) -> Result<Comparison> {
        let comparison = compare(results)?;
        if self.config.print_comparison {
            self.presenter.report_comparison(results, &comparison);
        }
        Ok(comparison)
    }

    /// Borrow the sink
    pub fn sink(&self) -> &S {
        self.presenter.sink()
    }

    /// Recover the sink
    pub fn into_sink(self) -> S {
        self.presenter.into_sink()
    }

    fn present_run(&mut self, result: &TimingResult) {
        if self.config.print_runs {
            self.presenter.report_run(result);
        }
    }
}
