//! # Dataset
//!
//! Seeded generation of random point pairs for the benchmarks.
//!
//! Pairs are drawn in the curvilinear form (polar / spherical) and then
//! converted, so the Cartesian batch describes exactly the same geometry.

use std::f64::consts::{PI, TAU};

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::core::config::RadiusRange;
use crate::core::{Cartesian2, Cartesian3, Polar, Spherical};

/// Matched planar batches: `cartesian[i]` is `polar[i]` converted
#[derive(Debug, Clone)]
pub struct PlanarDataset {
    pub polar: Vec<(Polar, Polar)>,
    pub cartesian: Vec<(Cartesian2, Cartesian2)>,
}

impl PlanarDataset {
    pub fn len(&self) -> usize {
        self.polar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polar.is_empty()
    }
}

/// Matched spatial batches: `cartesian[i]` is `spherical[i]` converted
///
/// Both points of each pair share one radius.
#[derive(Debug, Clone)]
pub struct SpatialDataset {
    pub spherical: Vec<(Spherical, Spherical)>,
    pub cartesian: Vec<(Cartesian3, Cartesian3)>,
}

impl SpatialDataset {
    pub fn len(&self) -> usize {
        self.spherical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spherical.is_empty()
    }
}

/// Generate `n` planar pairs
///
/// Radius uniform in `radius`, angle uniform in [0, 2π).
pub fn planar_pairs(n: usize, radius: RadiusRange, seed: u64) -> PlanarDataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let polar: Vec<(Polar, Polar)> = (0..n)
        .map(|_| {
            let a = Polar::new(
                rng.gen_range(radius.min..radius.max),
                rng.gen_range(0.0..TAU),
            );
            let b = Polar::new(
                rng.gen_range(radius.min..radius.max),
                rng.gen_range(0.0..TAU),
            );
            (a, b)
        })
        .collect();

    let cartesian = polar
        .iter()
        .map(|(a, b)| (Cartesian2::from_polar(*a), Cartesian2::from_polar(*b)))
        .collect();

    debug!(pairs = n, seed, "generated planar dataset");
    PlanarDataset { polar, cartesian }
}

/// Generate `n` spatial pairs
///
/// One radius per pair uniform in `radius`; azimuth uniform in [0, 2π),
/// polar angle uniform in [0, π).
pub fn spatial_pairs(n: usize, radius: RadiusRange, seed: u64) -> SpatialDataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let spherical: Vec<(Spherical, Spherical)> = (0..n)
        .map(|_| {
            let shared = rng.gen_range(radius.min..radius.max);
            let a = Spherical::new(shared, rng.gen_range(0.0..TAU), rng.gen_range(0.0..PI));
            let b = Spherical::new(shared, rng.gen_range(0.0..TAU), rng.gen_range(0.0..PI));
            (a, b)
        })
        .collect();

    let cartesian = spherical
        .iter()
        .map(|(a, b)| (Cartesian3::from_spherical(*a), Cartesian3::from_spherical(*b)))
        .collect();

    debug!(pairs = n, seed, "generated spatial dataset");
    SpatialDataset {
        spherical,
        cartesian,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distance::{
        planar_cartesian_distance, polar_distance, spatial_cartesian_distance,
        spherical_chord_distance,
    };

    #[test]
    fn test_planar_sizes_and_ranges() {
        let range = RadiusRange::new(1.0, 100.0);
        let data = planar_pairs(500, range, 42);

        assert_eq!(data.len(), 500);
        assert_eq!(data.cartesian.len(), 500);
        for (a, b) in &data.polar {
            assert!(range.contains(a.radius()) && range.contains(b.radius()));
            assert!((0.0..TAU).contains(&a.angle()));
            assert!((0.0..TAU).contains(&b.angle()));
        }
    }

    #[test]
    fn test_spatial_shared_radius() {
        let range = RadiusRange::new(10.0, 100.0);
        let data = spatial_pairs(500, range, 42);

        assert_eq!(data.len(), 500);
        for (a, b) in &data.spherical {
            assert_eq!(a.radius(), b.radius());
            assert!(range.contains(a.radius()));
            assert!((0.0..PI).contains(&a.polar_angle()));
            assert!((0.0..PI).contains(&b.polar_angle()));
        }
    }

    #[test]
    fn test_same_seed_same_data() {
        let range = RadiusRange::new(1.0, 100.0);
        let first = planar_pairs(100, range, 42);
        let second = planar_pairs(100, range, 42);
        assert_eq!(first.polar, second.polar);
        assert_eq!(first.cartesian, second.cartesian);

        let third = planar_pairs(100, range, 43);
        assert_ne!(first.polar, third.polar);
    }

    #[test]
    fn test_spatial_deterministic() {
        let range = RadiusRange::new(10.0, 100.0);
        assert_eq!(
            spatial_pairs(50, range, 7).spherical,
            spatial_pairs(50, range, 7).spherical
        );
    }

    #[test]
    fn test_batches_describe_same_geometry() {
        let planar = planar_pairs(200, RadiusRange::new(1.0, 100.0), 1);
        for ((pa, pb), (ca, cb)) in planar.polar.iter().zip(&planar.cartesian) {
            let d = planar_cartesian_distance(ca, cb);
            assert!((polar_distance(pa, pb) - d).abs() < 1e-9 * d.max(1.0));
        }

        let spatial = spatial_pairs(200, RadiusRange::new(10.0, 100.0), 1);
        for ((sa, sb), (ca, cb)) in spatial.spherical.iter().zip(&spatial.cartesian) {
            let d = spatial_cartesian_distance(ca, cb);
            assert!((spherical_chord_distance(sa, sb) - d).abs() < 1e-9 * d.max(1.0));
        }
    }

    #[test]
    fn test_empty() {
        let data = planar_pairs(0, RadiusRange::new(1.0, 2.0), 42);
        assert!(data.is_empty());
    }
}
