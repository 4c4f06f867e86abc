//! Clock (Second-Chance) Replacement Policy.
//!
//! This policy approximates LRU with one reference bit per frame and a hand
//! that sweeps the frames circularly. A hit sets the page's bit. On a fault
//! with a full table the hand clears set bits as it passes and stops at the
//! first frame whose bit is already clear.
//!
//! The hand also advances by one slot every time a page is installed,
//! including while the table is still filling. Reference bits and the hand
//! persist for the whole run and are never reset.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_hit()` / `on_insert()`: O(1)
//!   - `select_victim()`: O(F), bounded to F + 1 hand visits
//! - **Space Complexity:** O(F) where F is the number of frames

use super::ReplacementPolicy;
use crate::common::PageId;
use crate::config::PolicyKind;
use crate::frames::FrameTable;

/// Clock Policy state.
#[derive(Debug, Clone)]
pub struct ClockPolicy {
    /// Reference bit of each occupied slot; grows as slots are first filled.
    referenced: Vec<bool>,
    /// Slot the hand currently points at.
    hand: usize,
    /// Number of frames the hand wraps around.
    capacity: usize,
}

impl ClockPolicy {
    /// Creates a new Clock policy instance with no bits and the hand at slot 0.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of frames.
    pub const fn new(capacity: usize) -> Self {
        Self {
            referenced: Vec::new(),
            hand: 0,
            capacity,
        }
    }

    /// Slot the hand currently points at.
    pub const fn hand(&self) -> usize {
        self.hand
    }

    /// Reference bits of the occupied slots, in slot order.
    pub fn reference_bits(&self) -> &[bool] {
        &self.referenced
    }

    fn advance(&mut self) {
        self.hand = (self.hand + 1).checked_rem(self.capacity).unwrap_or(0);
    }

    fn set(&mut self, slot: usize) {
        if let Some(bit) = self.referenced.get_mut(slot) {
            *bit = true;
        } else if slot == self.referenced.len() {
            self.referenced.push(true);
        }
    }
}

impl ReplacementPolicy for ClockPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Clock
    }

    /// Sets the reference bit of the hit slot. The hand does not move.
    fn on_hit(&mut self, _page: PageId, slot: usize, _position: usize) {
        self.set(slot);
    }

    /// Sets the reference bit of the new page and advances the hand past it.
    fn on_insert(&mut self, _page: PageId, slot: usize, _position: usize) {
        self.set(slot);
        self.advance();
    }

    /// Sweeps from the hand, giving every referenced page a second chance.
    ///
    /// One revolution clears every bit, so the slot reached on visit F + 1 is
    /// always clear; the loop is capped there.
    fn select_victim(&mut self, _frames: &FrameTable, _position: usize, _stream: &[PageId]) -> usize {
        for _ in 0..=self.referenced.len() {
            let Some(bit) = self.referenced.get_mut(self.hand) else {
                break;
            };
            if !*bit {
                break;
            }
            *bit = false;
            tracing::trace!(slot = self.hand, "clock: cleared reference bit");
            self.advance();
        }
        self.hand
    }
}
