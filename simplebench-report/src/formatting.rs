//! Output Formatting
//!
//! Human-readable text for runs and comparisons. Layout:
//! - a `Simplebench` banner between two dash rules
//! - one `Duration: <n>ns` line right after each run, then the banner and
//!   the record dump
//! - comparison blocks listing every run, then the fastest run per metric
//!
//! Seconds use `ns / 1e9` and `%g`-style rendering.

use crate::compare::Comparison;
use simplebench_core::{TimingResult, format_seconds};

const RULE_WIDTH: usize = 40;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Banner printed before every record dump
pub fn format_header() -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&rule());
    output.push('\n');
    output.push_str("Simplebench\n");
    output.push_str(&rule());
    output.push('\n');
    output
}

/// Progress line for a completed run
pub fn format_duration_line(result: &TimingResult) -> String {
    format!("Duration: {}ns\n", result.duration_ns())
}

/// Full report for one completed run
pub fn format_run(result: &TimingResult) -> String {
    let mut output = format_duration_line(result);
    output.push_str(&format_header());
    output.push_str(&result.to_string());
    output.push('\n');
    output
}

/// Comparison block: every run in order, then the winners
pub fn format_comparison(results: &[TimingResult], comparison: &Comparison) -> String {
    let mut output = format_header();
    output.push_str("Compare\n");
    output.push_str(&rule());
    output.push('\n');

    for (index, result) in results.iter().enumerate() {
        output.push_str(&format!("Run {}\n", index + 1));
        output.push_str(&result.to_string());
        output.push('\n');
    }

    output.push_str(&format!(
        "Fastest run: {} at {}\n",
        comparison.fastest.run,
        format_seconds(comparison.fastest.seconds())
    ));
    if let Some(average) = &comparison.fastest_average {
        output.push_str(&format!(
            "Fastest average call: {} at {}\n",
            average.run,
            format_seconds(average.seconds())
        ));
    }
    output.push_str(&rule());
    output.push('\n');

    output
}
