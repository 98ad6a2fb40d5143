//! Per-Call Timing: total time vs average call time
//!
//! Per-call mode reads the clock around every call. The run duration then
//! includes that overhead, so the fastest run and the fastest average call
//! can be different runs; both are reported.
//!
//! Run with: cargo run --example per_call -p simplebench-demos --release

use simplebench::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::hint::black_box;

fn main() -> anyhow::Result<()> {
    simplebench_demos::init_logging();

    let config = BenchConfig {
        mode: TimingMode::PerCall,
        ..Default::default()
    };
    let mut bench = Simplebench::with_config(config);

    let hash: HashMap<u32, u32> = (0..10_000).map(|i| (i, i * 2)).collect();
    let tree: BTreeMap<u32, u32> = (0..10_000).map(|i| (i, i * 2)).collect();
    let sorted: Vec<(u32, u32)> = (0..10_000).map(|i| (i, i * 2)).collect();

    let mut key = 0u32;
    let mut next_key = move || {
        key = (key + 7_919) % 10_000;
        key
    };

    let results = [
        bench.bench(100_000, "HashMap::get", || black_box(hash.get(&next_key())))?,
        bench.bench(100_000, "BTreeMap::get", || black_box(tree.get(&next_key())))?,
        bench.bench(100_000, "binary_search", || {
            let k = next_key();
            black_box(sorted.binary_search_by_key(&k, |&(a, _)| a))
        })?,
    ];

    let comparison = bench.compare(&results)?;
    if comparison.winners_disagree() {
        println!("Total time and average call time picked different runs.");
    }

    // Fractional nanoseconds are only available on request
    for result in &results {
        if let Some(precise) = result.precise_average_call_ns() {
            println!("{}: {:.3} ns/call", result.name(), precise);
        }
    }
    Ok(())
}
