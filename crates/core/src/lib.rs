//! Page replacement simulation library.
//!
//! This crate replays a finite page reference stream against a fixed number of
//! frames and records what every replacement policy does, step by step:
//! 1. **Frames:** A slot-indexed resident set shared by all policies.
//! 2. **Policies:** FIFO, LRU, OPT (Belady) and Clock (second-chance) victim selection.
//! 3. **Trace:** One immutable `Step` per reference plus the total fault count.
//! 4. **Simulation:** The shared driver, the policy dispatcher and capacity sweeps.
//! 5. **Configuration and statistics:** JSON run configuration and fault/hit summaries.

/// Common types (page identifiers, errors).
pub mod common;
/// Run configuration (policy selection, frame count, reference stream).
pub mod config;
/// Slot-indexed frame table.
pub mod frames;
/// Replacement policies (FIFO, LRU, OPT, Clock).
pub mod policies;
/// Simulation driver and policy dispatcher.
pub mod sim;
/// Fault/hit statistics and report rendering.
pub mod stats;
/// Per-reference step records and the completed trace.
pub mod trace;

/// Run configuration; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::{PolicyKind, SimConfig};
/// Error type and result alias for configuration and policy selection.
pub use crate::common::{PageId, Result, SimError};
/// Resident-set container used by every policy run.
pub use crate::frames::FrameTable;
/// Entry points: run a single policy or a selection of policies.
pub use crate::sim::{run_policy, run_selected};
/// Output model of a policy run.
pub use crate::trace::{Step, Trace};
