//! Slot-indexed frame table.
//!
//! The frame table is the resident set of one policy run. Slots are filled in
//! order until the table reaches its capacity; from then on a slot is only
//! ever overwritten in place, so slot order is stable for the whole run.
//! FIFO and Clock depend on that order, LRU and OPT use it to break ties.

use crate::common::PageId;

/// Resident pages of one simulation run, in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    slots: Vec<PageId>,
    capacity: usize,
}

impl FrameTable {
    /// Creates an empty table with room for `capacity` pages.
    ///
    /// Slots are allocated as pages arrive, so any capacity is accepted.
    pub const fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    /// Creates an empty table for a run over `references` pages.
    ///
    /// A run can never occupy more slots than it has references, so at most
    /// `capacity.min(references)` slots are reserved up front.
    pub fn for_stream(capacity: usize, references: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.min(references)),
            capacity,
        }
    }

    /// Maximum number of resident pages.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` once every slot is occupied.
    ///
    /// A zero-capacity table is always full.
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Returns `true` if `page` is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&page)
    }

    /// Finds the slot holding `page`.
    pub fn slot_of(&self, page: PageId) -> Option<usize> {
        self.slots.iter().position(|&p| p == page)
    }

    /// Returns the page in `slot`, if that slot is occupied.
    pub fn get(&self, slot: usize) -> Option<PageId> {
        self.slots.get(slot).copied()
    }

    /// Places `page` in the next free slot and returns that slot.
    ///
    /// Returns `None` when the table is already full.
    pub fn push(&mut self, page: PageId) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        self.slots.push(page);
        Some(self.slots.len() - 1)
    }

    /// Overwrites `slot` with `page` and returns the page it held.
    ///
    /// Returns `None` (and leaves the table untouched) if `slot` is unoccupied.
    pub fn replace(&mut self, slot: usize, page: PageId) -> Option<PageId> {
        self.slots
            .get_mut(slot)
            .map(|resident| std::mem::replace(resident, page))
    }

    /// Iterates over resident pages in slot order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.slots.iter().copied()
    }

    /// Copies the resident pages, in slot order.
    pub fn snapshot(&self) -> Vec<PageId> {
        self.slots.clone()
    }

    /// Borrows the resident pages, in slot order.
    pub fn as_slice(&self) -> &[PageId] {
        &self.slots
    }
}
