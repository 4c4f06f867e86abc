//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the resident page that has not been referenced for the
//! longest time. It stamps every referenced page with the stream index of that
//! reference, after the hit/fault decision, so the page just touched is always
//! the most recent one.
//!
//! Stamps are never removed. Entries for evicted pages simply go stale and are
//! ignored, since victims are only chosen among resident pages.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_hit()` / `on_insert()`: O(1) expected
//!   - `select_victim()`: O(F) where F is the number of frames
//! - **Space Complexity:** O(P) where P is the number of distinct pages referenced

use std::collections::HashMap;

use super::ReplacementPolicy;
use crate::common::PageId;
use crate::config::PolicyKind;
use crate::frames::FrameTable;

/// LRU Policy state.
#[derive(Debug, Clone, Default)]
pub struct LruPolicy {
    /// Stream index of the most recent reference to each page seen so far.
    last_use: HashMap<PageId, usize>,
}

impl LruPolicy {
    /// Creates a new LRU policy instance with no recorded references.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stream index of the most recent reference to `page`, if any.
    pub fn last_use(&self, page: PageId) -> Option<usize> {
        self.last_use.get(&page).copied()
    }

    fn stamp(&mut self, page: PageId, position: usize) {
        let _ = self.last_use.insert(page, position);
    }
}

impl ReplacementPolicy for LruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn on_hit(&mut self, page: PageId, _slot: usize, position: usize) {
        self.stamp(page, position);
    }

    fn on_insert(&mut self, page: PageId, _slot: usize, position: usize) {
        self.stamp(page, position);
    }

    /// Returns the slot whose page has the oldest stamp.
    ///
    /// Ties resolve to the lowest slot (`min_by_key` keeps the first minimum).
    /// A resident page without a stamp sorts before every stamped page.
    fn select_victim(&mut self, frames: &FrameTable, _position: usize, _stream: &[PageId]) -> usize {
        frames
            .iter()
            .enumerate()
            .min_by_key(|&(_, page)| self.last_use(page))
            .map_or(0, |(slot, _)| slot)
    }
}
