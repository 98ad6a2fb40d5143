//! Integration tests for Simplebench
//!
//! These tests verify the end-to-end behavior: runs, comparisons, and the
//! text that reaches the sink.

use simplebench::prelude::*;
use simplebench::{BufferSink, OutputFormat, generate_json_report, render_report};
use std::hint::black_box;

fn sum_to(n: u64) -> u64 {
    (0..n).map(black_box).sum()
}

/// Every run satisfies end >= start and duration == end - start
#[test]
fn test_monotonic_duration() {
    for mode in [TimingMode::Aggregate, TimingMode::PerCall] {
        for iterations in [1, 7, 1_000] {
            let result = Runner::new(mode)
                .run(iterations, "sum", || sum_to(100))
                .unwrap();

            assert!(result.end_ns() >= result.start_ns());
            assert_eq!(result.duration_ns(), result.end_ns() - result.start_ns());
        }
    }
}

/// The closure runs exactly as many times as requested
#[test]
fn test_call_count_fidelity() {
    let mut counter = 0u64;
    run(37, "count", || counter += 1).unwrap();
    assert_eq!(counter, 37);

    let mut counter = 0u64;
    run_per_call(41, "count", || counter += 1).unwrap();
    assert_eq!(counter, 41);
}

/// average * iterations never exceeds the run duration
#[test]
fn test_average_division_law() {
    let result = run_per_call(333, "sum", || sum_to(50)).unwrap();
    let average = result.average_call_ns().unwrap();

    assert!(average * result.iterations() <= result.duration_ns());
    assert!(average <= result.duration_ns());
    let precise = result.precise_average_call_ns().unwrap();
    assert!(precise >= average as f64);
    assert!(precise < (average + 1) as f64);
}

/// Fastest run and tie-breaking on hand-built records
#[test]
fn test_comparator_determinism() {
    let build = |durations: [u64; 3]| -> Vec<TimingResult> {
        durations
            .iter()
            .enumerate()
            .map(|(i, &d)| TimingResult::new(format!("run{i}"), 0, d, 1).unwrap())
            .collect()
    };

    let comparison = compare(&build([50, 10, 30])).unwrap();
    assert_eq!(comparison.fastest.run, 2);

    let comparison = compare(&build([10, 10, 30])).unwrap();
    assert_eq!(comparison.fastest.run, 1);
}

/// Zero iterations and empty comparisons are rejected
#[test]
fn test_invalid_input_rejection() {
    let err = run_per_call(0, "none", || ()).unwrap_err();
    assert!(matches!(err, BenchError::InvalidArgument { .. }));

    let err = run(0, "none", || ()).unwrap_err();
    assert!(err.is_invalid_argument());

    let err = compare(&[]).unwrap_err();
    assert!(err.is_invalid_argument());
}

/// A failing callable ends the run at the failing call and yields no record
#[test]
fn test_callable_failure_propagation() {
    let mut counter = 0u32;
    let outcome = Runner::per_call().try_run(5, "flaky", || {
        counter += 1;
        if counter == 3 {
            anyhow::bail!("call {} failed", counter);
        }
        Ok(counter)
    });

    let err = outcome.unwrap_err().into_callable().unwrap();
    assert_eq!(err.to_string(), "call 3 failed");
    assert_eq!(counter, 3);
}

/// Full session through the harness: two runs, one comparison
#[test]
fn test_session_output() {
    let mut bench = Simplebench::with_sink(BenchConfig::default(), BufferSink::new());

    let small = bench.bench(10, "small", || sum_to(10)).unwrap();
    let large = bench
        .bench(10, "large", || {
            std::thread::sleep(std::time::Duration::from_millis(1))
        })
        .unwrap();
    let comparison = bench.compare(&[small.clone(), large.clone()]).unwrap();

    assert_eq!(comparison.fastest.run, 1);
    assert_eq!(comparison.fastest.name, "small");

    let text = bench.into_sink().into_string();
    let rule = "-".repeat(40);
    assert!(text.starts_with(&format!(
        "Duration: {}ns\n\n{rule}\nSimplebench\n{rule}\n",
        small.duration_ns()
    )));
    assert!(text.contains(&format!("Duration: {}ns\n", large.duration_ns())));
    assert!(text.contains(&format!("Compare\n{rule}\nRun 1\nTask name: small\n")));
    assert!(text.contains("Run 2\nTask name: large\n"));
    assert!(text.contains(&format!(
        "Fastest run: 1 at {}\n{rule}\n",
        simplebench::format_seconds(small.duration_secs())
    )));
}

/// Silent harness still returns structured results
#[test]
fn test_silent_session() {
    let mut bench = Simplebench::silent(BenchConfig {
        mode: TimingMode::PerCall,
        ..Default::default()
    });

    let a = bench.bench(20, "a", || sum_to(5)).unwrap();
    let b = bench.bench(20, "b", || sum_to(5_000)).unwrap();
    let comparison = bench.compare(&[a, b]).unwrap();

    assert!(comparison.fastest_average.is_some());
    assert_eq!(comparison.runs, 2);
}

/// Config text drives the harness
#[test]
fn test_config_from_toml() {
    let config = BenchConfig::from_toml_str(
        r#"
        mode = "per-call"
        print_comparison = false
        "#,
    )
    .unwrap();

    let mut bench = Simplebench::with_sink(config, BufferSink::new());
    let result = bench.bench(3, "cfg", || ()).unwrap();
    bench.compare(&[result]).unwrap();

    let text = bench.into_sink().into_string();
    assert!(text.contains("Average call (ns): "));
    assert!(!text.contains("Compare\n"));
}

/// JSON and human renderings agree on the winner
#[test]
fn test_report_renderings() {
    let results = vec![
        TimingResult::new("slow", 0, 900, 3).unwrap(),
        TimingResult::new("fast", 0, 300, 3).unwrap(),
    ];
    let comparison = compare(&results).unwrap();

    let human = render_report(&results, &comparison, OutputFormat::Human).unwrap();
    assert!(human.contains("Fastest run: 2 at 3e-07\n"));

    let json = generate_json_report(&results, Some(&comparison)).unwrap();
    assert!(json.contains("\"name\": \"fast\""));
}
