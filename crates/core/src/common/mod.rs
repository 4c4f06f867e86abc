//! Common types shared across the simulator.
//!
//! This module provides:
//! 1. **Page identifiers:** The integer type carried by reference streams and frames.
//! 2. **Error handling:** The error enum and result alias used at the library edges.

/// Error types for configuration and policy selection.
pub mod error;

pub use error::{Result, SimError};

/// Identifier of a virtual page as it appears in a reference stream.
///
/// Any integer is accepted, negative values included; the simulator never
/// interprets the value beyond equality.
pub type PageId = i64;
