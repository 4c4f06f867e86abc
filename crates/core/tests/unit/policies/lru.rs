//! LRU Policy Tests.
//!
//! LRU evicts the resident page whose most recent reference is oldest. The
//! faulting reference itself counts as a use of the new page.

use pagesim_core::{PolicyKind, run_policy};
use pretty_assertions::assert_eq;

use crate::common::{BELADY_STREAM, assert_trace_invariants};

/// A hit refreshes a page, so the next-oldest page is evicted instead.
#[test]
fn lru_hit_protects_page() {
    let stream = [1, 2, 3, 1, 4, 2];
    let trace = run_policy(PolicyKind::Lru, 3, &stream);
    assert_trace_invariants(&trace, &stream);

    let evicted: Vec<_> = trace.evictions().collect();
    assert_eq!(evicted, vec![2, 3]);
    assert_eq!(trace.final_frames(), &[1, 4, 2]);
}

/// The page installed by a fault is stamped on that same reference.
#[test]
fn lru_stamps_faulting_reference() {
    let stream = [1, 2, 3, 1];
    let trace = run_policy(PolicyKind::Lru, 2, &stream);
    assert_trace_invariants(&trace, &stream);

    // 3 replaces 1; then 1 must replace 2 (older than the just-loaded 3).
    let evicted: Vec<_> = trace.evictions().collect();
    assert_eq!(evicted, vec![1, 2]);
    assert_eq!(trace.final_frames(), &[3, 1]);
}

/// Per-step eviction choices on the anomaly stream.
#[test]
fn lru_eviction_sequence() {
    let trace = run_policy(PolicyKind::Lru, 3, &BELADY_STREAM);
    assert_trace_invariants(&trace, &BELADY_STREAM);

    let evicted: Vec<_> = trace.evictions().collect();
    assert_eq!(evicted, vec![1, 2, 3, 4, 5, 1, 2]);
    assert_eq!(trace.fault_count(), 10);
}
