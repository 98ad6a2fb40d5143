//! Silent Harness: structured results without console output
//!
//! Runs and comparison produce data only; the rendering is chosen by the
//! first command-line argument ("human" or "json", default "json").
//!
//! Run with: cargo run --example silent_json -p simplebench-demos --release -- json

use simplebench::prelude::*;
use simplebench::{OutputFormat, render_report};
use std::hint::black_box;

fn main() -> anyhow::Result<()> {
    simplebench_demos::init_logging();

    let format: OutputFormat = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "json".to_string())
        .parse()
        .map_err(|err: String| anyhow::anyhow!(err))?;

    let mut bench = Simplebench::silent(BenchConfig::default());
    let words: Vec<String> = (0..1_000).map(|i| format!("word{i}")).collect();

    let results = [
        bench.bench(500, "concat", || black_box(words.concat()))?,
        bench.bench(500, "join", || black_box(words.join("")))?,
        bench.bench(500, "fold push_str", || {
            black_box(words.iter().fold(String::new(), |mut acc, w| {
                acc.push_str(w);
                acc
            }))
        })?,
    ];

    let comparison = bench.compare(&results)?;
    println!("{}", render_report(&results, &comparison, format)?);
    Ok(())
}
