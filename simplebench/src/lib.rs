#![warn(missing_docs)]
//! # Simplebench
//!
//! Small microbenchmarking harness: time a closure over repeated calls,
//! then compare the runs and report the fastest.
//!
//! - **Monotonic timing**: every reading comes from a clock that never goes backwards
//! - **Two timing modes**: whole-loop only, or whole-loop plus every call
//! - **Deterministic comparison**: earliest run wins ties, run numbers are 1-based
//! - **Injected output**: reports go to any [`OutputSink`], including a silent one
//!
//! ## Quick Start
//!
//! ```no_run
//! use simplebench::prelude::*;
//!
//! let mut bench = Simplebench::new();
//! let sum = bench.bench(1_000, "sum", || (0..1_000u64).sum::<u64>()).unwrap();
//! let fold = bench
//!     .bench(1_000, "fold", || (0..1_000u64).fold(0, |a, b| a + b))
//!     .unwrap();
//! let comparison = bench.compare(&[sum, fold]).unwrap();
//! println!("winner: {}", comparison.fastest.name);
//! ```
//!
//! ## Without printing
//!
//! ```
//! use simplebench::{compare, run_per_call};
//!
//! let a = run_per_call(100, "a", || std::hint::black_box(2 + 2)).unwrap();
//! let b = run_per_call(100, "b", || std::hint::black_box(3 * 3)).unwrap();
//! let comparison = compare(&[a, b]).unwrap();
//! assert!(comparison.fastest_average.is_some());
//! ```

mod harness;

pub use harness::Simplebench;

// Re-export core types
pub use simplebench_core::{
    BenchConfig, BenchError, Instant, NANOS_PER_SECOND, Result, RunError, Runner, Timer,
    TimingMode, TimingResult, format_seconds, ns_to_s, run, run_per_call,
};

// Re-export reporting
pub use simplebench_report::{
    BufferSink, Comparison, Fastest, JsonReport, Metric, NullSink, OutputFormat, OutputSink,
    Presenter, StdoutSink, WriterSink, compare, format_comparison, format_header, format_run,
    generate_json_report, render_report,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchConfig, BenchError, Comparison, OutputSink, Runner, Simplebench, TimingMode,
        TimingResult, compare, run, run_per_call,
    };
}
