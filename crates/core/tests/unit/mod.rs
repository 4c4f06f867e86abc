//! # Unit Components
//!
//! Groups the tests by simulator component: configuration, frame table,
//! individual policies, the simulation driver, reports, and cross-policy
//! properties.

/// Configuration parsing, defaults and validation.
pub mod config;



/// Cross-policy properties checked over generated reference streams.
pub mod properties;


/// Driver, dispatcher and sweep behaviour.
pub mod sim;
