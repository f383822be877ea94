//! Process-wide instance counters for lifecycle diagnostics.
//!
//! Two counters track [`FixedVector`](crate::FixedVector) lifecycles across
//! the whole process: how many instances are currently alive, and how many
//! have ever been constructed (including clones). Both start at zero and are
//! updated atomically, so they stay coherent even if vectors are built on
//! several threads. They are instrumentation only and carry no semantic
//! weight in any arithmetic result.

use core::sync::atomic::{AtomicUsize, Ordering};

static LIVE: AtomicUsize = AtomicUsize::new(0);
static TOTAL: AtomicUsize = AtomicUsize::new(0);

/// Called from every counted constructor.
pub(crate) fn record_created() {
    LIVE.fetch_add(1, Ordering::Relaxed);
    TOTAL.fetch_add(1, Ordering::Relaxed);
}

/// Called from `Drop`.
pub(crate) fn record_dropped() {
    LIVE.fetch_sub(1, Ordering::Relaxed);
}

/// Number of vector instances currently alive in this process.
pub fn live_instances() -> usize {
    LIVE.load(Ordering::Relaxed)
}

/// Number of vector instances ever constructed in this process.
///
/// Monotonically non-decreasing; never reset.
pub fn total_created() -> usize {
    TOTAL.load(Ordering::Relaxed)
}
