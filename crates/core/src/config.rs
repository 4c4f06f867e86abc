//! Configuration system for the page replacement simulator.
//!
//! This module defines the configuration structures and enums used to describe a run:
//! 1. **Defaults:** Baseline frame count and policy selection.
//! 2. **Enums:** Replacement policy identifiers.
//! 3. **Structures:** The run configuration (`SimConfig`) and its validation.
//!
//! Configuration is supplied as JSON (for example through `pagesim run --config`)
//! or built with `SimConfig::default()` and overridden field by field.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{PageId, Result, SimError};

/// Default configuration constants for the simulator.
mod defaults {
    use super::PolicyKind;

    /// Number of frames when none is configured.
    pub const FRAMES: usize = 3;

    /// Policies simulated when none are selected explicitly.
    pub const POLICIES: [PolicyKind; 4] = PolicyKind::ALL;
}

/// Page replacement policy algorithms.
///
/// Specifies the algorithm used to select which resident page to evict
/// when a faulting page must be installed in a full frame table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// First In First Out replacement policy.
    ///
    /// Evicts the page that was loaded earliest, regardless of later hits.
    #[serde(alias = "Fifo", alias = "fifo")]
    Fifo,
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the resident page whose most recent reference is oldest.
    #[serde(alias = "Lru", alias = "lru")]
    Lru,
    /// Belady's optimal replacement policy.
    ///
    /// Evicts the resident page whose next reference lies farthest in the
    /// future. Requires the whole reference stream up front.
    #[serde(alias = "Opt", alias = "opt", alias = "OPTIMAL", alias = "Optimal")]
    Opt,
    /// Clock (second-chance) replacement policy.
    ///
    /// Sweeps a circular hand over the frames, clearing reference bits and
    /// evicting the first page whose bit is already clear.
    #[serde(alias = "Clock", alias = "clock")]
    Clock,
}

impl PolicyKind {
    /// Every supported policy, in display order.
    pub const ALL: [Self; 4] = [Self::Fifo, Self::Lru, Self::Opt, Self::Clock];

    /// Returns the canonical upper-case name of the policy.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Opt => "OPT",
            Self::Clock => "CLOCK",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    /// Parses a policy name, ignoring case and surrounding whitespace.
    ///
    /// Accepts `fifo`, `lru`, `opt` (also `optimal`, `belady`) and `clock`
    /// (also `second-chance`).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            "opt" | "optimal" | "belady" => Ok(Self::Opt),
            "clock" | "second-chance" | "second_chance" => Ok(Self::Clock),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Root configuration structure for a simulation run.
///
/// # Examples
///
/// ```
/// use pagesim_core::config::{PolicyKind, SimConfig};
///
/// let json = r#"{
///     "frames": 3,
///     "pages": [7, 0, 1, 2, 0, 3],
///     "policies": ["fifo", "OPT"]
/// }"#;
///
/// let config = SimConfig::from_json(json).unwrap();
/// assert_eq!(config.frames, 3);
/// assert_eq!(config.policies, vec![PolicyKind::Fifo, PolicyKind::Opt]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of physical frames available to every policy.
    #[serde(default = "SimConfig::default_frames")]
    pub frames: usize,

    /// Reference stream replayed by every policy.
    #[serde(default)]
    pub pages: Vec<PageId>,

    /// Policies to simulate, in the order results should be reported.
    #[serde(default = "SimConfig::default_policies")]
    pub policies: Vec<PolicyKind>,
}

impl SimConfig {
    /// Returns the default frame count.
    fn default_frames() -> usize {
        defaults::FRAMES
    }

    /// Returns the default policy selection (all policies).
    fn default_policies() -> Vec<PolicyKind> {
        defaults::POLICIES.to_vec()
    }

    /// Parses and validates a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] on malformed JSON and
    /// [`SimError::EmptySelection`] when the policy list is empty.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`SimConfig::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks the configuration for selections the simulator cannot honour.
    ///
    /// Duplicate policies are allowed; each produces its own trace.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::EmptySelection`] when no policy is selected.
    pub fn validate(&self) -> Result<()> {
        if self.policies.is_empty() {
            return Err(SimError::EmptySelection);
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: Self::default_frames(),
            pages: Vec::new(),
            policies: Self::default_policies(),
        }
    }
}
