//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the page that was loaded earliest, regardless of how
//! recently or how often it was referenced since. It keeps an admission queue
//! of resident pages in load order; hits never reorder it.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_hit()`: O(1)
//!   - `on_insert()`: O(1)
//!   - `select_victim()`: O(F) where F is the number of frames (slot lookup)
//! - **Space Complexity:** O(min(F, N)) where N is the stream length
//! - **Weakness:** Subject to Belady's anomaly (more frames can mean more faults)

use std::collections::VecDeque;

use super::ReplacementPolicy;
use crate::common::PageId;
use crate::config::PolicyKind;
use crate::frames::FrameTable;

/// FIFO Policy state.
#[derive(Debug, Clone, Default)]
pub struct FifoPolicy {
    /// Resident pages in admission order; the front is the oldest.
    admitted: VecDeque<PageId>,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance with an empty admission queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resident pages in admission order, oldest first.
    pub fn admission_order(&self) -> impl Iterator<Item = PageId> + '_ {
        self.admitted.iter().copied()
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    /// A FIFO policy does not care about access patterns. This is a no-op.
    fn on_hit(&mut self, _page: PageId, _slot: usize, _position: usize) {}

    /// Appends the newly loaded page to the back of the admission queue.
    fn on_insert(&mut self, page: PageId, _slot: usize, _position: usize) {
        self.admitted.push_back(page);
    }

    /// Pops the oldest admitted page and returns the slot it occupies.
    fn select_victim(&mut self, frames: &FrameTable, _position: usize, _stream: &[PageId]) -> usize {
        // The queue mirrors the resident set, so the first pop always resolves.
        while let Some(oldest) = self.admitted.pop_front() {
            if let Some(slot) = frames.slot_of(oldest) {
                return slot;
            }
        }
        0
    }
}
