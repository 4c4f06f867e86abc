//! # Simulation Driver Tests
//!
//! Step-by-step ticking, dispatcher ordering, configuration runs and sweeps.

use pagesim_core::sim::{Simulator, anomalies, run_config, sweep};
use pagesim_core::{PolicyKind, SimConfig, SimError, run_policy, run_selected};
use pretty_assertions::assert_eq;

use crate::common::{BELADY_STREAM, CLASSIC_STREAM};

#[test]
fn tick_reports_each_step_until_exhausted() {
    let stream = [1, 2, 1];
    let mut sim = Simulator::new(PolicyKind::Lru, 2, &stream);

    let first = sim.tick().unwrap();
    assert!(first.fault);
    assert!(first.frames_before.is_empty());

    let _ = sim.tick().unwrap();
    assert_eq!(sim.frames().as_slice(), &[1, 2]);

    let third = sim.tick().unwrap();
    assert!(third.is_hit());
    assert_eq!(third.frames_before, vec![1, 2]);

    assert!(sim.is_done());
    assert_eq!(sim.position(), 3);
    assert!(sim.tick().is_none());
    assert_eq!(sim.run(), run_policy(PolicyKind::Lru, 2, &stream));
}

#[test]
fn run_after_partial_ticks_covers_whole_stream() {
    let mut sim = Simulator::new(PolicyKind::Fifo, 2, &CLASSIC_STREAM);
    for _ in 0..4 {
        let _ = sim.tick();
    }
    assert_eq!(sim.position(), 4);
    assert_eq!(sim.frames().as_slice(), &[1, 2]);

    let trace = sim.run();
    assert_eq!(trace.len(), CLASSIC_STREAM.len());
    assert_eq!(trace, run_policy(PolicyKind::Fifo, 2, &CLASSIC_STREAM));
}

#[test]
fn selected_policies_keep_requested_order() {
    let order = [PolicyKind::Clock, PolicyKind::Opt, PolicyKind::Fifo, PolicyKind::Opt];
    let results = run_selected(&order, 3, &CLASSIC_STREAM);

    let kinds: Vec<_> = results.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, order.to_vec());
    for (kind, trace) in &results {
        assert_eq!(trace.policy(), *kind);
    }
    assert_eq!(results[1].1, results[3].1);
}

#[test]
fn selected_runs_match_individual_runs() {
    let results = run_selected(&PolicyKind::ALL, 3, &BELADY_STREAM);
    for (kind, trace) in results {
        assert_eq!(trace, run_policy(kind, 3, &BELADY_STREAM));
    }
}

#[test]
fn run_config_uses_configured_inputs() {
    let config = SimConfig {
        frames: 3,
        pages: BELADY_STREAM.to_vec(),
        policies: vec![PolicyKind::Lru, PolicyKind::Opt],
        ..SimConfig::default()
    };
    let results = run_config(&config).unwrap();
    let faults: Vec<_> = results.iter().map(|(_, t)| t.fault_count()).collect();
    assert_eq!(faults, vec![10, 7]);
}

#[test]
fn run_config_rejects_empty_selection() {
    let config = SimConfig {
        policies: Vec::new(),
        ..SimConfig::default()
    };
    assert!(matches!(run_config(&config), Err(SimError::EmptySelection)));
}

#[test]
fn fifo_sweep_exposes_belady_anomaly() {
    let curve = sweep(PolicyKind::Fifo, 5, &BELADY_STREAM);
    assert_eq!(curve, vec![(1, 12), (2, 12), (3, 9), (4, 10), (5, 5)]);
    assert_eq!(anomalies(&curve), vec![4]);
}

#[test]
fn lru_sweep_is_monotone() {
    let curve = sweep(PolicyKind::Lru, 5, &BELADY_STREAM);
    assert!(anomalies(&curve).is_empty());
    assert_eq!(curve.last(), Some(&(5, 5)));
}

#[test]
fn runs_on_separate_threads_are_independent() {
    let handles: Vec<_> = PolicyKind::ALL
        .into_iter()
        .map(|kind| std::thread::spawn(move || (kind, run_policy(kind, 3, &CLASSIC_STREAM))))
        .collect();
    for handle in handles {
        let (kind, trace) = handle.join().unwrap();
        assert_eq!(trace, run_policy(kind, 3, &CLASSIC_STREAM));
    }
}
