//! Step records and completed traces.
//!
//! Every reference consumed from the stream produces exactly one [`Step`]. A
//! [`Trace`] collects the steps of one policy run together with its fault
//! total; it is assembled by the simulation driver and read-only afterwards.

use serde::{Deserialize, Serialize};

use crate::common::PageId;
use crate::config::PolicyKind;

/// Snapshot of a single reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Page referenced at this step.
    pub page: PageId,
    /// Resident pages, in slot order, before this reference was applied.
    pub frames_before: Vec<PageId>,
    /// Whether the page was absent from the frames.
    pub fault: bool,
    /// Page removed to make room, if the table was full at a fault.
    pub evicted: Option<PageId>,
}

impl Step {
    /// Returns `true` if this reference was served from the frames.
    pub const fn is_hit(&self) -> bool {
        !self.fault
    }
}

/// Complete result of one policy run.
///
/// `steps().len()` always equals the length of the reference stream and
/// `fault_count()` always equals the number of faulting steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    policy: PolicyKind,
    capacity: usize,
    steps: Vec<Step>,
    fault_count: usize,
    final_frames: Vec<PageId>,
}

impl Trace {
    /// Policy that produced this trace.
    pub const fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Frame capacity the policy ran with.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Per-reference records, in stream order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Total number of page faults.
    pub const fn fault_count(&self) -> usize {
        self.fault_count
    }

    /// Total number of hits.
    pub fn hit_count(&self) -> usize {
        self.steps.len() - self.fault_count
    }

    /// Number of references replayed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the reference stream was empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Resident pages, in slot order, after the last reference.
    pub fn final_frames(&self) -> &[PageId] {
        &self.final_frames
    }

    /// Pages evicted over the run, in order.
    pub fn evictions(&self) -> impl Iterator<Item = PageId> + '_ {
        self.steps.iter().filter_map(|step| step.evicted)
    }
}

/// Accumulates steps during a run and keeps the fault total in sync.
#[derive(Debug)]
pub(crate) struct TraceBuilder {
    policy: PolicyKind,
    capacity: usize,
    steps: Vec<Step>,
    fault_count: usize,
}

impl TraceBuilder {
    /// Starts an empty trace sized for `references` steps.
    pub(crate) fn new(policy: PolicyKind, capacity: usize, references: usize) -> Self {
        Self {
            policy,
            capacity,
            steps: Vec::with_capacity(references),
            fault_count: 0,
        }
    }

    /// Appends a step, counting it if it faulted.
    pub(crate) fn record(&mut self, step: Step) {
        if step.fault {
            self.fault_count += 1;
        }
        self.steps.push(step);
    }

    /// Freezes the accumulated steps into a trace.
    pub(crate) fn finish(self, final_frames: Vec<PageId>) -> Trace {
        Trace {
            policy: self.policy,
            capacity: self.capacity,
            steps: self.steps,
            fault_count: self.fault_count,
            final_frames,
        }
    }
}
