//! JSON Output
//!
//! Machine-readable rendering of a set of runs and their comparison, built in
//! memory for embedding callers. Nothing is written to disk.

use crate::compare::Comparison;
use chrono::{DateTime, Utc};
use serde::Serialize;
use simplebench_core::TimingResult;

/// Current JSON schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Complete JSON document
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    /// Schema version
    pub schema_version: u32,
    /// Crate version that produced the report
    pub version: &'static str,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
    /// Runs in the order they were compared
    pub results: &'a [TimingResult],
    /// Winners, absent when only runs are reported
    pub comparison: Option<&'a Comparison>,
}

impl<'a> JsonReport<'a> {
    /// Build a report stamped with the current time
    pub fn new(results: &'a [TimingResult], comparison: Option<&'a Comparison>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now(),
            results,
            comparison,
        }
    }
}

/// Generate a prettified JSON report.
pub fn generate_json_report(
    results: &[TimingResult],
    comparison: Option<&Comparison>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport::new(results, comparison))
}
