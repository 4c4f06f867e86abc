//! Error definitions.
//!
//! The simulation functions themselves are total over their inputs and never
//! fail. Errors only arise at the edges of the library:
//! 1. **Policy selection:** A policy name that does not match any known policy.
//! 2. **Configuration:** Malformed or incomplete JSON run configurations.
//! 3. **I/O:** Configuration files that cannot be read.

use thiserror::Error;

/// Errors raised while selecting policies or loading a run configuration.
#[derive(Debug, Error)]
pub enum SimError {
    /// A policy name did not match `fifo`, `lru`, `opt` or `clock`.
    ///
    /// The associated value is the name as supplied by the caller.
    #[error("unknown replacement policy `{0}` (expected one of: fifo, lru, opt, clock)")]
    UnknownPolicy(String),

    /// A configuration selected no policies at all.
    #[error("no replacement policy selected")]
    EmptySelection,

    /// The configuration document was not valid JSON for `SimConfig`.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;
