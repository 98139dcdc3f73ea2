//! # Distance
//!
//! Distance between two points given in the same representation, each
//! computed with the formula native to that representation.
//!
//! | Representation | Formula |
//! |---|---|
//! | Cartesian 2D | Euclidean norm of the difference |
//! | Polar | law of cosines |
//! | Cartesian 3D | Euclidean norm of the difference |
//! | Spherical (chord) | law of cosines on the central angle |
//! | Spherical (arc) | mean radius × central angle |
//!
//! All functions are pure and never panic. NaN and infinities in the inputs
//! propagate per IEEE rules.

use super::point::{Cartesian2, Cartesian3, Polar, Spherical};

/// `acos` with its argument clamped to [−1, 1]
///
/// Rounding can push a cosine a few ulps past ±1; unclamped that yields NaN.
/// NaN itself passes through unchanged.
#[inline]
pub fn clamped_acos(cos: f64) -> f64 {
    cos.clamp(-1.0, 1.0).acos()
}

/// Cosine of the central angle between two spherical directions
///
/// sinφa·sinφb·cos(θb − θa) + cosφa·cosφb
///
/// Not clamped: may overshoot [−1, 1] by a few ulps.
#[inline]
pub fn central_angle_cosine(a: &Spherical, b: &Spherical) -> f64 {
    let (sin_a, cos_a) = a.polar_angle().sin_cos();
    let (sin_b, cos_b) = b.polar_angle().sin_cos();
    let cos_azimuth_diff = (b.azimuth() - a.azimuth()).cos();

    sin_a * sin_b * cos_azimuth_diff + cos_a * cos_b
}

/// √(r₁² + r₂² − 2·r₁·r₂·cos γ), floored at zero before the root
#[inline]
fn law_of_cosines(r1: f64, r2: f64, cos_gamma: f64) -> f64 {
    let squared = r1 * r1 + r2 * r2 - 2.0 * r1 * r2 * cos_gamma;
    // Coincident points can round to -1e-15; NaN must still pass through.
    if squared < 0.0 {
        0.0
    } else {
        squared.sqrt()
    }
}

/// Euclidean distance in the plane
///
/// # Example
/// ```
/// use coordkit::{planar_cartesian_distance, Cartesian2};
/// let d = planar_cartesian_distance(&Cartesian2::new(0.0, 0.0), &Cartesian2::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
pub fn planar_cartesian_distance(a: &Cartesian2, b: &Cartesian2) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    dx.hypot(dy)
}

/// Distance between polar points by the law of cosines
///
/// Angles need no normalization: cosine is periodic.
pub fn polar_distance(a: &Polar, b: &Polar) -> f64 {
    law_of_cosines(a.radius(), b.radius(), (b.angle() - a.angle()).cos())
}

/// Euclidean distance in space
pub fn spatial_cartesian_distance(a: &Cartesian3, b: &Cartesian3) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    let dz = b.z() - a.z();
    dx.hypot(dy).hypot(dz)
}

/// Straight-line distance between spherical points
///
/// Valid for any two radii; equals the Euclidean distance between the
/// converted Cartesian points.
pub fn spherical_chord_distance(a: &Spherical, b: &Spherical) -> f64 {
    law_of_cosines(a.radius(), b.radius(), central_angle_cosine(a, b))
}

/// Great-circle distance between spherical points
///
/// Both points are expected on one sphere. When the radii differ the mean of
/// the two is used as the sphere radius; nothing is rejected.
///
/// # Example
/// ```
/// use coordkit::{spherical_arc_distance, Spherical};
/// use std::f64::consts::FRAC_PI_2;
///
/// let a = Spherical::new(10.0, 0.0, FRAC_PI_2);
/// let b = Spherical::new(10.0, FRAC_PI_2, FRAC_PI_2);
/// assert!((spherical_arc_distance(&a, &b) - 10.0 * FRAC_PI_2).abs() < 1e-10);
/// ```
pub fn spherical_arc_distance(a: &Spherical, b: &Spherical) -> f64 {
    let radius = (a.radius() + b.radius()) / 2.0;
    radius * clamped_acos(central_angle_cosine(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::convert::{polar_from_cartesian, spherical_from_cartesian};
    use crate::core::TOLERANCE;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_planar_cartesian() {
        let a = Cartesian2::new(1.0, 2.0);
        let b = Cartesian2::new(4.0, 6.0);
        assert_eq!(planar_cartesian_distance(&a, &b), 5.0);
        assert_eq!(planar_cartesian_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_polar_matches_cartesian() {
        let a = Cartesian2::new(1.0, 2.0);
        let b = Cartesian2::new(4.0, 6.0);
        let d_polar = polar_distance(&polar_from_cartesian(a), &polar_from_cartesian(b));
        assert!((d_polar - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_polar_wraparound() {
        let a = Polar::new(1.0, 0.1);
        let b = Polar::new(1.0, 2.0 * PI - 0.1);
        let expected = 2.0 * (0.1_f64).sin();
        assert!((polar_distance(&a, &b) - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_polar_coincident_is_zero_not_nan() {
        let p = Polar::new(7.3, 1.234);
        let d = polar_distance(&p, &p);
        assert!(!d.is_nan());
        assert!(d >= 0.0 && d < 1e-6);
    }

    #[test]
    fn test_spatial_cartesian() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        let b = Cartesian3::new(4.0, 5.0, 6.0);
        let d = spatial_cartesian_distance(&a, &b);
        assert!((d - 27.0_f64.sqrt()).abs() < TOLERANCE);
        assert!((d - 5.196152).abs() < 1e-6);
    }

    #[test]
    fn test_chord_matches_cartesian() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        let b = Cartesian3::new(4.0, 5.0, 6.0);
        let chord = spherical_chord_distance(
            &spherical_from_cartesian(a),
            &spherical_from_cartesian(b),
        );
        assert!((chord - spatial_cartesian_distance(&a, &b)).abs() < TOLERANCE);
    }

    #[test]
    fn test_chord_different_radii() {
        // Same direction, radii 2 and 5
        let a = Spherical::new(2.0, 0.3, 1.1);
        let b = Spherical::new(5.0, 0.3, 1.1);
        assert!((spherical_chord_distance(&a, &b) - 3.0).abs() < 1e-7);
    }

    #[test]
    fn test_arc_quarter_circle() {
        let a = Spherical::new(10.0, 0.0, FRAC_PI_2);
        let b = Spherical::new(10.0, FRAC_PI_2, FRAC_PI_2);
        let d = spherical_arc_distance(&a, &b);
        assert!((d - 10.0 * FRAC_PI_2).abs() < TOLERANCE);
        assert!((d - 15.70796).abs() < 1e-5);
    }

    #[test]
    fn test_arc_antipodal() {
        let north = Spherical::new(1.0, 0.0, 0.0);
        let south = Spherical::new(1.0, 0.0, PI);
        assert!((spherical_arc_distance(&north, &south) - PI).abs() < TOLERANCE);
    }

    #[test]
    fn test_arc_uses_mean_radius() {
        let a = Spherical::new(8.0, 0.0, FRAC_PI_2);
        let b = Spherical::new(12.0, FRAC_PI_2, FRAC_PI_2);
        assert!((spherical_arc_distance(&a, &b) - 10.0 * FRAC_PI_2).abs() < TOLERANCE);
    }

    #[test]
    fn test_arc_identical_points_not_nan() {
        // cos_arc can land a hair above 1.0 here
        let p = Spherical::new(1.0, 2.1, 0.7);
        let d = spherical_arc_distance(&p, &p);
        assert!(!d.is_nan());
        assert!(d >= 0.0 && d < 1e-7);
    }

    #[test]
    fn test_clamped_acos() {
        assert_eq!(clamped_acos(1.0 + 1e-15), 0.0);
        assert!((clamped_acos(-1.0 - 1e-15) - PI).abs() < TOLERANCE);
        assert!((clamped_acos(0.0) - FRAC_PI_2).abs() < TOLERANCE);
        assert!(clamped_acos(f64::NAN).is_nan());
    }

    #[test]
    fn test_cartesian_large_coordinates() {
        let far = Cartesian2::new(1e200, 0.0);
        assert_eq!(planar_cartesian_distance(&Cartesian2::ORIGIN, &far), 1e200);

        let up = Cartesian3::new(0.0, 0.0, 1e200);
        assert_eq!(spatial_cartesian_distance(&Cartesian3::ORIGIN, &up), 1e200);
    }

    #[test]
    fn test_nan_propagates() {
        let a = Cartesian2::new(f64::NAN, 0.0);
        assert!(planar_cartesian_distance(&a, &Cartesian2::ORIGIN).is_nan());

        let p = Polar::new(f64::NAN, 0.0);
        assert!(polar_distance(&p, &Polar::new(1.0, 0.0)).is_nan());

        let s = Spherical::new(1.0, f64::NAN, 0.5);
        assert!(spherical_arc_distance(&s, &Spherical::new(1.0, 0.0, 0.5)).is_nan());
    }
}
