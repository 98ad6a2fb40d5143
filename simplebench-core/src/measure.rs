//! Monotonic Timing
//!
//! Every reading comes from `std::time::Instant`, which never goes backwards
//! and ignores wall-clock adjustments. Readings are expressed as nanoseconds
//! since a process-wide anchor captured on first use, so that two readings
//! taken anywhere in the process can be subtracted directly.

use std::sync::OnceLock;
use std::time::Duration;

static ANCHOR: OnceLock<std::time::Instant> = OnceLock::new();

#[inline(always)]
fn anchor() -> std::time::Instant {
    *ANCHOR.get_or_init(std::time::Instant::now)
}

// ─── Instant ─────────────────────────────────────────────────────────────────

/// Monotonic clock reading with nanosecond resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    nanos: u64,
}

impl Instant {
    /// Capture current instant
    #[inline(always)]
    pub fn now() -> Self {
        let anchor = anchor();
        let nanos = std::time::Instant::now().duration_since(anchor).as_nanos();
        Self {
            nanos: u64::try_from(nanos).unwrap_or(u64::MAX),
        }
    }

    /// Nanoseconds since the process anchor
    #[inline(always)]
    pub fn as_nanos(&self) -> u64 {
        self.nanos
    }

    /// Nanoseconds between `earlier` and this instant (zero if `earlier` is later)
    #[inline(always)]
    pub fn nanos_since(&self, earlier: Instant) -> u64 {
        self.nanos.saturating_sub(earlier.nanos)
    }

    /// Compute elapsed time since this instant
    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(Instant::now().nanos_since(*self))
    }
}

// ─── Timer ───────────────────────────────────────────────────────────────────

/// Timer for measuring a single invocation
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return elapsed nanoseconds
    #[inline(always)]
    pub fn stop(&self) -> u64 {
        Instant::now().nanos_since(self.start)
    }
}
