//! Simulation entry points.
//!
//! Provides the per-policy run function, the dispatcher that runs a caller's
//! policy selection in order, and capacity sweeps. Every run builds its own
//! frame table and policy state, so runs never influence each other and may
//! be executed on separate threads.

/// Step-by-step simulator for a single policy run.
pub mod simulator;

pub use simulator::Simulator;

use crate::common::{PageId, Result};
use crate::config::{PolicyKind, SimConfig};
use crate::trace::Trace;

/// Runs `policy` with `capacity` frames over `stream`.
///
/// Never fails: an empty stream yields an empty trace, and a capacity of zero
/// yields a trace in which every reference faults without evicting anything.
pub fn run_policy(policy: PolicyKind, capacity: usize, stream: &[PageId]) -> Trace {
    let trace = Simulator::new(policy, capacity, stream).run();
    tracing::debug!(
        policy = %policy,
        capacity,
        references = stream.len(),
        faults = trace.fault_count(),
        "simulation finished"
    );
    trace
}

/// Runs each selected policy independently, preserving the requested order.
///
/// Duplicate entries are run again and reported again.
pub fn run_selected(
    policies: &[PolicyKind],
    capacity: usize,
    stream: &[PageId],
) -> Vec<(PolicyKind, Trace)> {
    policies
        .iter()
        .map(|&policy| (policy, run_policy(policy, capacity, stream)))
        .collect()
}

/// Validates `config` and runs its policy selection.
///
/// # Errors
///
/// Returns [`crate::SimError::EmptySelection`] when the configuration selects no policy.
pub fn run_config(config: &SimConfig) -> Result<Vec<(PolicyKind, Trace)>> {
    config.validate()?;
    Ok(run_selected(&config.policies, config.frames, &config.pages))
}

/// Fault count of `policy` for every capacity from 1 to `max_capacity`.
///
/// # Returns
///
/// `(capacity, faults)` pairs in increasing capacity order.
pub fn sweep(policy: PolicyKind, max_capacity: usize, stream: &[PageId]) -> Vec<(usize, usize)> {
    (1..=max_capacity)
        .map(|capacity| (capacity, run_policy(policy, capacity, stream).fault_count()))
        .collect()
}

/// Capacities at which adding one frame increased the fault count.
///
/// A non-empty result is an instance of Belady's anomaly. LRU, OPT and other
/// stack algorithms never produce one; FIFO and Clock can.
pub fn anomalies(curve: &[(usize, usize)]) -> Vec<usize> {
    curve
        .windows(2)
        .filter(|pair| pair[1].1 > pair[0].1)
        .map(|pair| pair[1].0)
        .collect()
}
