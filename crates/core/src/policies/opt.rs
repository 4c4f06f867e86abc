//! Belady's Optimal (OPT) Replacement Policy.
//!
//! This policy evicts the resident page whose next reference lies farthest in
//! the future, which minimises the number of faults for a known reference
//! stream. It keeps no history; every decision looks ahead into the part of
//! the stream that has not been consumed yet.
//!
//! Victim selection, in slot order:
//! - The first resident page that is never referenced again is chosen at once.
//! - Otherwise the page with the farthest next reference wins. The comparison
//!   is strict, so among equally distant pages the lowest slot wins.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_hit()` / `on_insert()`: O(1)
//!   - `select_victim()`: O(F × N) where N is the remaining stream length
//! - **Space Complexity:** O(1)
//! - **Use:** Not implementable online; serves as the lower bound for the other policies

use super::ReplacementPolicy;
use crate::common::PageId;
use crate::config::PolicyKind;
use crate::frames::FrameTable;

/// OPT Policy state. The policy is stateless between references.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptPolicy;

impl OptPolicy {
    /// Creates a new OPT policy instance.
    pub const fn new() -> Self {
        Self
    }

    /// Distance from the start of `upcoming` to the next reference of `page`.
    fn next_use(page: PageId, upcoming: &[PageId]) -> Option<usize> {
        upcoming.iter().position(|&p| p == page)
    }
}

impl ReplacementPolicy for OptPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Opt
    }

    fn on_hit(&mut self, _page: PageId, _slot: usize, _position: usize) {}

    fn on_insert(&mut self, _page: PageId, _slot: usize, _position: usize) {}

    fn select_victim(&mut self, frames: &FrameTable, position: usize, stream: &[PageId]) -> usize {
        let upcoming = stream.get(position + 1..).unwrap_or_default();

        let mut victim = 0;
        let mut farthest: Option<usize> = None;
        for (slot, page) in frames.iter().enumerate() {
            match Self::next_use(page, upcoming) {
                None => return slot,
                Some(distance) => {
                    if farthest.is_none_or(|best| distance > best) {
                        farthest = Some(distance);
                        victim = slot;
                    }
                }
            }
        }
        victim
    }
}
