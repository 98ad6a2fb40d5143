//! Fallible Callables: errors end the run
//!
//! `try_bench` stops at the first `Err`, hands the callable's own error back
//! unchanged, and produces no timing record for the partial run.
//!
//! Run with: cargo run --example fallible -p simplebench-demos --release

use simplebench::prelude::*;
use simplebench::RunError;

fn parse_all(inputs: &[&str]) -> anyhow::Result<u64> {
    let mut total = 0u64;
    for input in inputs {
        total += input.parse::<u64>()?;
    }
    Ok(total)
}

fn main() -> anyhow::Result<()> {
    simplebench_demos::init_logging();

    let mut bench = Simplebench::new();

    let clean = ["1", "22", "333", "4444"];
    let good = bench
        .try_bench(10_000, "parse clean", || parse_all(&clean))
        .map_err(|err| anyhow::anyhow!("{err}"))?;

    let mut calls = 0u32;
    let outcome = bench.try_bench(10_000, "parse dirty", || {
        calls += 1;
        if calls == 5_000 {
            parse_all(&["1", "two", "3"])
        } else {
            parse_all(&clean)
        }
    });

    match outcome {
        Ok(_) => unreachable!("the dirty input fails on call 5000"),
        Err(RunError::Callable(err)) => {
            println!("run aborted after {calls} calls: {err}");
        }
        Err(RunError::InvalidArgument(err)) => return Err(err.into()),
    }

    bench.compare(&[good])?;
    Ok(())
}
