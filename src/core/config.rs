//! # Configuration
//!
//! Benchmark configuration - how much data, from which seed, in which
//! radius bands.
//!
//! Same config, same seed, same data. Timings differ run to run; the inputs
//! never do.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Half-open band `[min, max)` that generated radii are drawn from
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiusRange {
    pub min: f64,
    pub max: f64,
}

impl RadiusRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check whether `radius` falls inside the band
    pub fn contains(&self, radius: f64) -> bool {
        radius >= self.min && radius < self.max
    }

    fn validate(&self, label: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "{} radius range must be finite, got [{}, {})",
                label, self.min, self.max
            )));
        }
        if self.min < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "{} radius range must be non-negative, got min {}",
                label, self.min
            )));
        }
        if self.min >= self.max {
            return Err(Error::InvalidConfig(format!(
                "{} radius range is empty: [{}, {})",
                label, self.min, self.max
            )));
        }
        Ok(())
    }
}

impl FromStr for RadiusRange {
    type Err = Error;

    /// Parse `MIN,MAX`, e.g. `1,100`
    fn from_str(s: &str) -> Result<Self> {
        let (min, max) = s.split_once(',').ok_or_else(|| {
            Error::InvalidConfig(format!("radius range must be MIN,MAX, got {:?}", s))
        })?;

        let parse = |part: &str| {
            part.trim().parse::<f64>().map_err(|e| {
                Error::InvalidConfig(format!("bad radius {:?} in {:?}: {}", part.trim(), s, e))
            })
        };

        Ok(Self::new(parse(min)?, parse(max)?))
    }
}

/// Main benchmark configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Number of point pairs per batch
    pub pairs: usize,

    /// Seed for data generation
    pub seed: u64,

    /// Radius band for planar (polar) points
    pub planar_radius: RadiusRange,

    /// Radius band for spatial (spherical) points
    ///
    /// Both points of a pair share one radius drawn from this band.
    pub spatial_radius: RadiusRange,
}

impl BenchConfig {
    /// Create a configuration with `pairs` pairs per batch and default
    /// seed and radius bands
    pub fn new(pairs: usize) -> Self {
        Self {
            pairs,
            ..Self::default()
        }
    }

    pub fn with_pairs(mut self, pairs: usize) -> Self {
        self.pairs = pairs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_planar_radius(mut self, range: RadiusRange) -> Self {
        self.planar_radius = range;
        self
    }

    pub fn with_spatial_radius(mut self, range: RadiusRange) -> Self {
        self.spatial_radius = range;
        self
    }

    /// Tiny config for testing
    pub fn tiny() -> Self {
        Self::new(64)
    }

    /// Reject configurations that cannot produce data
    pub fn validate(&self) -> Result<()> {
        if self.pairs == 0 {
            return Err(Error::InvalidConfig("pairs must be at least 1".into()));
        }
        self.planar_radius.validate("planar")?;
        self.spatial_radius.validate("spatial")?;
        Ok(())
    }
}

impl Default for BenchConfig {
    /// Default configuration: 100 000 pairs, seed 42
    fn default() -> Self {
        Self {
            pairs: 100_000,
            seed: 42,
            planar_radius: RadiusRange::new(1.0, 100.0),
            spatial_radius: RadiusRange::new(10.0, 100.0),
        }
    }
}
