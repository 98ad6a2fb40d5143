//! Presenter
//!
//! Turns runner and comparator output into text on an injected sink. The
//! runner and comparator never print on their own.

use crate::compare::Comparison;
use crate::formatting::{format_comparison, format_run};
use crate::sink::{NullSink, OutputSink, StdoutSink};
use simplebench_core::TimingResult;

/// Writes formatted reports to an [`OutputSink`]
#[derive(Debug, Default)]
pub struct Presenter<S = StdoutSink> {
    sink: S,
}

impl Presenter<StdoutSink> {
    /// Presenter printing to standard output
    pub fn stdout() -> Self {
        Self::new(StdoutSink)
    }
}

impl Presenter<NullSink> {
    /// Presenter that discards everything
    pub fn silent() -> Self {
        Self::new(NullSink)
    }
}

impl<S: OutputSink> Presenter<S> {
    /// Presenter writing to `sink`
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Report a completed run
    pub fn report_run(&mut self, result: &TimingResult) {
        self.sink.write(&format_run(result));
    }

    /// Report a comparison of `results`
    pub fn report_comparison(&mut self, results: &[TimingResult], comparison: &Comparison) {
        self.sink.write(&format_comparison(results, comparison));
    }

    /// Borrow the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Recover the sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
