//! Simplebench Demos
//!
//! Runnable demonstrations of simplebench. This crate is not published; it
//! exists solely to host examples that depend on `simplebench`.
//!
//! Run any example with:
//! ```sh
//! cargo run --example <name> -p simplebench-demos --release
//! ```
//!
//! | Example | Feature |
//! |---------|---------|
//! | `compare_sums` | `Simplebench::bench` + `compare` with the classic console report |
//! | `per_call` | Per-call timing, average winner vs total winner |
//! | `fallible` | `try_bench` with a callable that fails part-way |
//! | `silent_json` | Silent harness with JSON or text rendering chosen on the command line |

/// Install a `tracing` subscriber; `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("simplebench=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
