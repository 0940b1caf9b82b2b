//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario:
//!
//! - [`EngineConfig`]     – engine options (neighbor-finder strategy)
//! - [`ParametersConfig`] – numerical and physical parameters
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   finder: "cell_index"    # or "brute_force"
//!
//! parameters:
//!   n: 500                  # particle count
//!   l: 10.0                 # side of the square domain
//!   v: 0.03                 # constant speed
//!   eta: 0.1                # angular noise amplitude
//!   r: 1.0                  # interaction radius
//!   steps: 1000             # total simulation steps
//!   save_every: 1           # snapshot cadence
//!   m: 5                    # grid cells per side (cell-index mode)
//!   seed: 42                # optional; entropy-seeded when omitted
//! ```
//!
//! Validation is fail-fast: a scenario with an invalid field is rejected
//! before any particle is created.

use serde::Deserialize;
use thiserror::Error;

/// Which neighbor-search strategy drives the run
/// `finder: "brute_force"` or `finder: "cell_index"`
#[derive(Deserialize, Debug, Clone)]
pub enum FinderConfig {
    #[serde(rename = "brute_force")] // direct O(N^2) all-pairs reference scan
    BruteForce,

    #[serde(rename = "cell_index")] // spatial grid, expected O(N) per step
    CellIndex,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub finder: FinderConfig, // neighbor-accumulation strategy
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub n: usize,        // particle count
    pub l: f64,          // domain side
    pub v: f64,          // constant speed
    pub eta: f64,        // noise amplitude
    pub r: f64,          // interaction radius
    pub steps: u64,      // total steps
    pub save_every: u64, // snapshot cadence
    pub m: usize,        // grid cells per side
    pub seed: Option<u64>, // deterministic seed, reproducible runs
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration
    pub parameters: ParametersConfig, // numerical and physical parameters
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("particle count n must be > 0")]
    ZeroParticles,
    #[error("domain side l must be > 0, got {0}")]
    NonPositiveDomain(f64),
    #[error("interaction radius r must be > 0, got {0}")]
    NonPositiveRadius(f64),
    #[error("grid resolution m must be >= 1")]
    ZeroCells,
    #[error("save_every must be >= 1")]
    ZeroSaveCadence,
    #[error("speed v must be >= 0, got {0}")]
    NegativeSpeed(f64),
    #[error("noise amplitude eta must be >= 0, got {0}")]
    NegativeNoise(f64),
}

impl ParametersConfig {
    /// Reject invalid parameter combinations before any state is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        if !(self.l > 0.0) {
            return Err(ConfigError::NonPositiveDomain(self.l));
        }
        if !(self.r > 0.0) {
            return Err(ConfigError::NonPositiveRadius(self.r));
        }
        if self.m == 0 {
            return Err(ConfigError::ZeroCells);
        }
        if self.save_every == 0 {
            return Err(ConfigError::ZeroSaveCadence);
        }
        if self.v < 0.0 {
            return Err(ConfigError::NegativeSpeed(self.v));
        }
        if self.eta < 0.0 {
            return Err(ConfigError::NegativeNoise(self.eta));
        }
        Ok(())
    }
}
