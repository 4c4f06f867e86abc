//! Simulator: owns the frame table and the policy side-by-side.
//!
//! The simulator replays a reference stream one reference per `tick`. It
//! decides hit or fault itself, installs pages into the frame table, and
//! consults the policy only for bookkeeping and victim selection.

use crate::common::PageId;
use crate::config::PolicyKind;
use crate::frames::FrameTable;
use crate::policies::{ReplacementPolicy, new_policy};
use crate::trace::{Step, Trace, TraceBuilder};

/// Top-level simulator for one policy over one reference stream.
pub struct Simulator<'a> {
    frames: FrameTable,
    policy: Box<dyn ReplacementPolicy>,
    stream: &'a [PageId],
    position: usize,
    trace: TraceBuilder,
}

impl std::fmt::Debug for Simulator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("policy", &self.policy.kind())
            .field("frames", &self.frames)
            .field("position", &self.position)
            .field("references", &self.stream.len())
            .finish_non_exhaustive()
    }
}

impl<'a> Simulator<'a> {
    /// Creates a simulator with a fresh instance of `kind`.
    ///
    /// The frame table and the policy are built together from `capacity`,
    /// so they always agree on the number of frames.
    pub fn new(kind: PolicyKind, capacity: usize, stream: &'a [PageId]) -> Self {
        Self {
            frames: FrameTable::for_stream(capacity, stream.len()),
            policy: new_policy(kind, capacity),
            stream,
            position: 0,
            trace: TraceBuilder::new(kind, capacity, stream.len()),
        }
    }

    /// Resident pages at this point of the run.
    pub const fn frames(&self) -> &FrameTable {
        &self.frames
    }

    /// Index of the next reference to replay.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` once every reference has been replayed.
    pub const fn is_done(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Replays the next reference.
    ///
    /// # Returns
    ///
    /// The step just recorded, or `None` if the stream is exhausted.
    pub fn tick(&mut self) -> Option<Step> {
        let position = self.position;
        let &page = self.stream.get(position)?;
        let frames_before = self.frames.snapshot();
        let kind = self.policy.kind();

        let step = if let Some(slot) = self.frames.slot_of(page) {
            tracing::trace!(policy = %kind, position, page, slot, "hit");
            self.policy.on_hit(page, slot, position);
            Step {
                page,
                frames_before,
                fault: false,
                evicted: None,
            }
        } else {
            let evicted = self.install(page, position);
            tracing::debug!(policy = %kind, position, page, ?evicted, "page fault");
            Step {
                page,
                frames_before,
                fault: true,
                evicted,
            }
        };

        self.position += 1;
        self.trace.record(step.clone());
        Some(step)
    }

    /// Places a faulting page and returns the page it displaced, if any.
    ///
    /// A zero-capacity table has nowhere to put the page: the fault is
    /// recorded and nothing is installed or evicted.
    fn install(&mut self, page: PageId, position: usize) -> Option<PageId> {
        if self.frames.capacity() == 0 {
            return None;
        }
        if let Some(slot) = self.frames.push(page) {
            self.policy.on_insert(page, slot, position);
            return None;
        }

        let slot = self
            .policy
            .select_victim(&self.frames, position, self.stream);
        let evicted = self.frames.replace(slot, page);
        self.policy.on_insert(page, slot, position);
        evicted
    }

    /// Replays every remaining reference and returns the completed trace.
    ///
    /// References already replayed with [`Simulator::tick`] are kept, so the
    /// trace always covers the whole stream.
    pub fn run(mut self) -> Trace {
        while self.tick().is_some() {}
        self.trace.finish(self.frames.snapshot())
    }
}
