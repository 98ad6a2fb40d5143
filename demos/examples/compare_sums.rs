//! Classic Report: three ways to sum a vector
//!
//! Each run prints as it completes, then the comparison block names the
//! fastest run (1-based) and its total time in seconds.
//!
//! Run with: cargo run --example compare_sums -p simplebench-demos --release

use simplebench::prelude::*;
use std::hint::black_box;

fn main() -> anyhow::Result<()> {
    simplebench_demos::init_logging();

    let data: Vec<u64> = (0..10_000).collect();
    let mut bench = Simplebench::new();

    let iter_sum = bench.bench(1_000, "iter().sum()", || black_box(data.iter().sum::<u64>()))?;

    let fold = bench.bench(1_000, "iter().fold()", || {
        black_box(data.iter().fold(0u64, |acc, x| acc + x))
    })?;

    let manual = bench.bench(1_000, "index loop", || {
        let mut total = 0u64;
        for i in 0..data.len() {
            total += data[i];
        }
        black_box(total)
    })?;

    bench.compare(&[iter_sum, fold, manual])?;
    Ok(())
}
