//! # Metric
//!
//! Trait form of the distance engine.
//!
//! Each representation has its own metric type so a caller can hold a
//! `&dyn Metric<Spherical>` and swap chord for arc without touching the
//! call site. Metrics are unit structs and cost nothing to pass around.

use super::distance;
use super::point::{Cartesian2, Cartesian3, Polar, Spherical};

/// Trait for measuring the distance between two points of type `P`
pub trait Metric<P>: Send + Sync {
    /// Compute the distance between two points
    ///
    /// Never negative for finite inputs.
    fn distance(&self, a: &P, b: &P) -> f64;

    /// Name of this metric (for reports/config)
    fn name(&self) -> &'static str;

    /// Distance for every pair, in order
    fn batch(&self, pairs: &[(P, P)]) -> Vec<f64> {
        pairs.iter().map(|(a, b)| self.distance(a, b)).collect()
    }
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

/// Euclidean distance on planar Cartesian points
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanarEuclidean;

impl Metric<Cartesian2> for PlanarEuclidean {
    fn distance(&self, a: &Cartesian2, b: &Cartesian2) -> f64 {
        distance::planar_cartesian_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "planar_euclidean"
    }
}

/// Law of cosines on polar points
#[derive(Clone, Copy, Debug, Default)]
pub struct PolarLawOfCosines;

impl Metric<Polar> for PolarLawOfCosines {
    fn distance(&self, a: &Polar, b: &Polar) -> f64 {
        distance::polar_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "polar_law_of_cosines"
    }
}

/// Euclidean distance on spatial Cartesian points
#[derive(Clone, Copy, Debug, Default)]
pub struct SpatialEuclidean;

impl Metric<Cartesian3> for SpatialEuclidean {
    fn distance(&self, a: &Cartesian3, b: &Cartesian3) -> f64 {
        distance::spatial_cartesian_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "spatial_euclidean"
    }
}

/// Straight-line (chord) distance on spherical points
#[derive(Clone, Copy, Debug, Default)]
pub struct SphericalChord;

impl Metric<Spherical> for SphericalChord {
    fn distance(&self, a: &Spherical, b: &Spherical) -> f64 {
        distance::spherical_chord_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "spherical_chord"
    }
}

/// Great-circle (arc) distance on spherical points
///
/// Note: This is a surface distance. It is always ≥ the chord distance
/// between the same two points.
#[derive(Clone, Copy, Debug, Default)]
pub struct SphericalArc;

impl Metric<Spherical> for SphericalArc {
    fn distance(&self, a: &Spherical, b: &Spherical) -> f64 {
        distance::spherical_arc_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "spherical_arc"
    }
}
