//! # Report Port
//!
//! Trait for sinks that receive driver output.
//!
//! The drivers (`adapters::verify`, `adapters::bench`) never print. They hand
//! each result to a `Report`, and the reporter decides on the format.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::timing::{PlanarBench, SpatialBench};
use crate::Result;

/// What a correctness check exercised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Cartesian 2D → polar → Cartesian 2D
    PlanarRoundTrip,
    /// Cartesian 3D → spherical → Cartesian 3D
    SpatialRoundTrip,
    /// Polar distance against planar Euclidean distance
    PlanarEquivalence,
    /// Spherical chord distance against spatial Euclidean distance
    SpatialEquivalence,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckKind::PlanarRoundTrip => "2D round trip",
            CheckKind::SpatialRoundTrip => "3D round trip",
            CheckKind::PlanarEquivalence => "2D distance equivalence",
            CheckKind::SpatialEquivalence => "3D distance equivalence",
        };
        f.write_str(name)
    }
}

/// Result of one correctness check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub kind: CheckKind,

    /// Intermediate values, one per line, for display
    pub steps: Vec<String>,

    /// Largest absolute discrepancy observed
    pub max_error: f64,

    /// Tolerance the error was compared against
    pub tolerance: f64,

    pub passed: bool,
}

impl CheckOutcome {
    /// Build an outcome; passes iff `max_error < tolerance`
    ///
    /// A NaN error fails.
    pub fn new(kind: CheckKind, steps: Vec<String>, max_error: f64, tolerance: f64) -> Self {
        Self {
            kind,
            steps,
            max_error,
            tolerance,
            passed: max_error < tolerance,
        }
    }
}

/// Pass/fail tally of a verification run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifySummary {
    pub passed: usize,
    pub failed: usize,
}

impl VerifySummary {
    pub fn record(&mut self, outcome: &CheckOutcome) {
        if outcome.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Trait for receiving driver output
///
/// Reporter adapters implement this trait.
pub trait Report {
    /// Start a titled group of results
    fn section(&mut self, title: &str) -> Result<()>;

    /// Record one correctness check
    fn check(&mut self, outcome: &CheckOutcome) -> Result<()>;

    /// Record the planar benchmark
    fn planar_bench(&mut self, bench: &PlanarBench) -> Result<()>;

    /// Record the spatial benchmark
    fn spatial_bench(&mut self, bench: &SpatialBench) -> Result<()>;

    /// Record the verification tally
    fn verify_summary(&mut self, _summary: &VerifySummary) -> Result<()> {
        Ok(())
    }

    /// Flush anything buffered
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
