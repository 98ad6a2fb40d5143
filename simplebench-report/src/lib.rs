#![warn(missing_docs)]
//! Simplebench Report - Comparison and Presentation
//!
//! - [`compare`] picks the fastest run by duration and by average call time
//! - Human-readable formatting of runs and comparisons
//! - [`Presenter`] writing that text to an injected [`OutputSink`]
//! - JSON rendering for embedding callers

mod compare;
mod formatting;
mod json;
mod presenter;
mod sink;

pub use compare::{Comparison, Fastest, Metric, compare};
pub use formatting::{format_comparison, format_duration_line, format_header, format_run};
pub use json::{JsonReport, SCHEMA_VERSION, generate_json_report};
pub use presenter::Presenter;
pub use sink::{BufferSink, NullSink, OutputSink, StdoutSink, WriterSink};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON document
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Render a comparison of `results` in the requested format
pub fn render_report(
    results: &[simplebench_core::TimingResult],
    comparison: &Comparison,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(format_comparison(results, comparison)),
        OutputFormat::Json => generate_json_report(results, Some(comparison)),
    }
}
