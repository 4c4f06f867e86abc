//! Page Replacement Policies.
//!
//! Implements the algorithms that choose which resident page to evict when a
//! faulting page must be installed in a full frame table.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out (admission order).
//! - `Lru`: Least Recently Used (last reference index).
//! - `Opt`: Belady's optimal (farthest next reference).
//! - `Clock`: Second-chance (reference bits and a circular hand).
//!
//! Every policy instance is scoped to a single run: it is created empty, fed
//! the run's events in stream order, and dropped with the run.

/// Clock (second-chance) replacement policy.
pub mod clock;

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Belady's optimal replacement policy.
pub mod opt;

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use opt::OptPolicy;

use crate::common::PageId;
use crate::config::PolicyKind;
use crate::frames::FrameTable;

/// Trait for page replacement policies.
///
/// The simulation driver decides hits and faults and owns the frame table;
/// the policy only tracks its private bookkeeping and names victim slots.
pub trait ReplacementPolicy: Send + Sync {
    /// Identifies the algorithm, for traces and logging.
    fn kind(&self) -> PolicyKind;

    /// Updates the policy state after a hit.
    ///
    /// # Arguments
    ///
    /// * `page` - The referenced page.
    /// * `slot` - The slot holding `page`.
    /// * `position` - Index of the reference in the stream.
    fn on_hit(&mut self, page: PageId, slot: usize, position: usize);

    /// Updates the policy state after `page` was installed in `slot`.
    ///
    /// Called both when filling a free slot and after an eviction.
    ///
    /// # Arguments
    ///
    /// * `page` - The page just installed.
    /// * `slot` - The slot it now occupies.
    /// * `position` - Index of the reference in the stream.
    fn on_insert(&mut self, page: PageId, slot: usize, position: usize);

    /// Selects the slot to evict from a full, non-empty frame table.
    ///
    /// # Arguments
    ///
    /// * `frames` - The resident pages before the eviction.
    /// * `position` - Index of the faulting reference in `stream`.
    /// * `stream` - The complete reference stream (only OPT looks ahead).
    ///
    /// # Returns
    ///
    /// The index of the slot to overwrite.
    fn select_victim(&mut self, frames: &FrameTable, position: usize, stream: &[PageId]) -> usize;
}

/// Creates a fresh policy instance of the requested kind for `capacity` frames.
///
/// No policy allocates per frame up front; state grows with the pages
/// actually installed.
pub fn new_policy(kind: PolicyKind, capacity: usize) -> Box<dyn ReplacementPolicy> {
    match kind {
        PolicyKind::Fifo => Box::new(FifoPolicy::new()),
        PolicyKind::Lru => Box::new(LruPolicy::new()),
        PolicyKind::Opt => Box::new(OptPolicy::new()),
        PolicyKind::Clock => Box::new(ClockPolicy::new(capacity)),
    }
}
