//! Wall-clock timing for the sort strategies.
//!
//! [`time_sort`] wraps a sort routine as an opaque callable: it copies the
//! input into a private buffer, times the synchronous call with a monotonic
//! clock, and reports elapsed milliseconds under a caller-supplied label. It
//! never inspects the result; correctness checks live in [`crate::validation`].

use std::fmt;
use std::time::{Duration, Instant};

/// Elapsed wall-clock time for one labeled sort run.
#[derive(Debug, Clone)]
pub struct SortTiming {
    /// Caller-supplied strategy label.
    pub label: String,
    /// Wall-clock duration of the sort call.
    pub elapsed: Duration,
}

impl SortTiming {
    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for SortTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} time: {:.3} ms", self.label, self.elapsed_ms())
    }
}

/// Time `sort` over a private copy of `input`.
///
/// The copy means repeated measurements all start from the same unsorted
/// data and the caller's buffer is left untouched.
pub fn time_sort<T, F>(label: &str, input: &[T], sort: F) -> SortTiming
where
    T: Copy,
    F: FnOnce(&mut [T]),
{
    let mut buf = input.to_vec();
    let start = Instant::now();
    sort(&mut buf);
    let elapsed = start.elapsed();
    SortTiming {
        label: label.to_string(),
        elapsed,
    }
}

/// Print one parallel-sort phase duration to stderr.
///
/// Stderr keeps the instrumentation out of the demo's stdout report.
#[cfg(feature = "timing")]
pub fn report_phase(name: &str, elapsed: Duration) {
    eprintln!(
        "  [timing] {}: {:.3} ms",
        name,
        elapsed.as_secs_f64() * 1000.0
    );
}
