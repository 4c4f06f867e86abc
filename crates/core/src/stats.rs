//! Simulation statistics collection and reporting.
//!
//! This module summarises completed traces. It provides:
//! 1. **Counts:** References, faults and hits per policy run.
//! 2. **Ratios:** Hit and fault rates.
//! 3. **Reports:** A step-by-step frame table per trace and a comparison summary.

use std::fmt;

use serde::Serialize;

use crate::config::PolicyKind;
use crate::trace::Trace;

/// Summary statistics of one policy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceStats {
    /// Policy that produced the trace.
    pub policy: PolicyKind,
    /// Frame capacity of the run.
    pub capacity: usize,
    /// Number of references replayed.
    pub references: usize,
    /// Number of page faults.
    pub faults: usize,
    /// Number of hits.
    pub hits: usize,
}

impl TraceStats {
    /// Fraction of references that hit, or 0.0 for an empty stream.
    pub fn hit_ratio(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted, or 0.0 for an empty stream.
    pub fn fault_ratio(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl From<&Trace> for TraceStats {
    fn from(trace: &Trace) -> Self {
        Self {
            policy: trace.policy(),
            capacity: trace.capacity(),
            references: trace.len(),
            faults: trace.fault_count(),
            hits: trace.hit_count(),
        }
    }
}

/// Step-by-step rendering of a trace: one row per reference.
///
/// Columns are the referenced page, the frames before the reference, the
/// outcome, and the evicted page.
#[derive(Debug, Clone, Copy)]
pub struct TraceTable<'a>(pub &'a Trace);

impl fmt::Display for TraceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trace = self.0;
        writeln!(f, "==========================================================")?;
        writeln!(
            f,
            "{} ({} frame{})",
            trace.policy(),
            trace.capacity(),
            if trace.capacity() == 1 { "" } else { "s" }
        )?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "  {:<5} {:<8} {:<24} {:<6} evicted", "step", "page", "frames", "result")?;
        for (index, step) in trace.steps().iter().enumerate() {
            let frames = step
                .frames_before
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            let evicted = step.evicted.map_or_else(|| "-".to_string(), |p| p.to_string());
            writeln!(
                f,
                "  {:<5} {:<8} [{:<22}] {:<6} {}",
                index + 1,
                step.page,
                frames,
                if step.fault { "FAULT" } else { "hit" },
                evicted
            )?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "  faults                 {}", trace.fault_count())?;
        writeln!(f, "  hits                   {}", trace.hit_count())
    }
}

/// Side-by-side comparison of several runs over the same input.
#[derive(Debug, Clone)]
pub struct Summary(pub Vec<TraceStats>);

impl Summary {
    /// Builds a summary from `(policy, trace)` pairs as returned by the dispatcher.
    pub fn from_traces(traces: &[(PolicyKind, Trace)]) -> Self {
        Self(traces.iter().map(|(_, trace)| TraceStats::from(trace)).collect())
    }

    /// The run with the fewest faults; the first one wins ties.
    pub fn best(&self) -> Option<&TraceStats> {
        self.0.iter().min_by_key(|stats| stats.faults)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "PAGE REPLACEMENT SUMMARY")?;
        writeln!(f, "==========================================================")?;
        for stats in &self.0 {
            writeln!(
                f,
                "  {:<6} frames: {:<4} | faults: {:<6} | hits: {:<6} | fault_rate: {:.2}%",
                stats.policy.name(),
                stats.capacity,
                stats.faults,
                stats.hits,
                stats.fault_ratio() * 100.0
            )?;
        }
        if let Some(best) = self.best() {
            writeln!(f, "----------------------------------------------------------")?;
            writeln!(f, "  fewest faults          {} ({})", best.policy, best.faults)?;
        }
        writeln!(f, "==========================================================")
    }
}
