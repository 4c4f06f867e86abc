//! Cross-Policy Properties.
//!
//! Generated streams over a small page alphabet, so that hits, evictions and
//! ties all occur frequently.

use pagesim_core::{PageId, PolicyKind, run_policy, run_selected};
use proptest::prelude::*;

use crate::common::{assert_trace_invariants, last_use, next_use};

fn stream_strategy() -> impl Strategy<Value = Vec<PageId>> {
    prop::collection::vec(0i64..8, 0..48)
}

fn policy_strategy() -> impl Strategy<Value = PolicyKind> {
    prop::sample::select(PolicyKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn every_trace_satisfies_structural_invariants(
        policy in policy_strategy(),
        capacity in 0usize..6,
        stream in stream_strategy(),
    ) {
        let trace = run_policy(policy, capacity, &stream);
        assert_trace_invariants(&trace, &stream);
        prop_assert_eq!(trace.policy(), policy);
        prop_assert_eq!(trace.capacity(), capacity);
    }

    #[test]
    fn runs_are_idempotent(
        policy in policy_strategy(),
        capacity in 0usize..6,
        stream in stream_strategy(),
    ) {
        prop_assert_eq!(
            run_policy(policy, capacity, &stream),
            run_policy(policy, capacity, &stream)
        );
    }

    #[test]
    fn opt_is_a_lower_bound(capacity in 1usize..6, stream in stream_strategy()) {
        let traces = run_selected(&PolicyKind::ALL, capacity, &stream);
        let opt = run_policy(PolicyKind::Opt, capacity, &stream).fault_count();
        for (policy, trace) in &traces {
            prop_assert!(opt <= trace.fault_count(), "{} beat OPT", policy);
        }
    }

    #[test]
    fn stack_policies_never_show_anomaly(capacity in 1usize..6, stream in stream_strategy()) {
        for policy in [PolicyKind::Lru, PolicyKind::Opt] {
            let smaller = run_policy(policy, capacity, &stream).fault_count();
            let larger = run_policy(policy, capacity + 1, &stream).fault_count();
            prop_assert!(larger <= smaller, "{} faulted more with more frames", policy);
        }
    }

    #[test]
    fn lru_evicts_least_recently_used(capacity in 1usize..6, stream in stream_strategy()) {
        let trace = run_policy(PolicyKind::Lru, capacity, &stream);
        for (position, step) in trace.steps().iter().enumerate() {
            let Some(victim) = step.evicted else { continue };
            let victim_use = last_use(&stream, position, victim);
            for &resident in &step.frames_before {
                prop_assert!(victim_use <= last_use(&stream, position, resident));
            }
        }
    }

    #[test]
    fn opt_evicts_farthest_or_dead_page(capacity in 1usize..6, stream in stream_strategy()) {
        let trace = run_policy(PolicyKind::Opt, capacity, &stream);
        for (position, step) in trace.steps().iter().enumerate() {
            let Some(victim) = step.evicted else { continue };
            let Some(victim_next) = next_use(&stream, position, victim) else { continue };
            for &resident in &step.frames_before {
                let resident_next = next_use(&stream, position, resident);
                prop_assert!(resident_next.is_some_and(|next| next <= victim_next));
            }
        }
    }

    #[test]
    fn fifo_evicts_earliest_admitted(capacity in 1usize..6, stream in stream_strategy()) {
        let trace = run_policy(PolicyKind::Fifo, capacity, &stream);
        let mut admitted_at: Vec<(PageId, usize)> = Vec::new();
        for (position, step) in trace.steps().iter().enumerate() {
            if let Some(victim) = step.evicted {
                let oldest = admitted_at
                    .iter()
                    .min_by_key(|(_, at)| *at)
                    .map(|(page, _)| *page);
                prop_assert_eq!(oldest, Some(victim));
                admitted_at.retain(|(page, _)| *page != victim);
            }
            if step.fault {
                admitted_at.push((step.page, position));
            }
        }
    }
}
