//! # Convert
//!
//! Conversions between the planar pair (Cartesian ↔ polar) and the spatial
//! pair (Cartesian ↔ spherical).
//!
//! Every conversion is total. The two singular inputs get fixed answers:
//! - planar origin → radius 0, angle `atan2(0, 0)` (0 for +0.0 inputs)
//! - spatial origin → radius 0, polar angle 0
//!
//! Conversions are inverses up to rounding, not bit-for-bit.

use super::distance::clamped_acos;
use super::point::{Cartesian2, Cartesian3, Polar, Spherical};

/// Cartesian (x, y) → polar (r, θ)
///
/// r = √(x² + y²), θ = atan2(y, x) ∈ (−π, π]
///
/// # Example
/// ```
/// use coordkit::{polar_from_cartesian, Cartesian2};
/// let p = polar_from_cartesian(Cartesian2::new(3.0, 4.0));
/// assert_eq!(p.radius(), 5.0);
/// ```
pub fn polar_from_cartesian(p: Cartesian2) -> Polar {
    let radius = p.x().hypot(p.y());
    let angle = p.y().atan2(p.x());
    Polar::new(radius, angle)
}

/// Polar (r, θ) → Cartesian (x, y)
///
/// A negative radius lands on the diametrically opposite point.
pub fn cartesian_from_polar(p: Polar) -> Cartesian2 {
    let (sin, cos) = p.angle().sin_cos();
    Cartesian2::new(p.radius() * cos, p.radius() * sin)
}

/// Cartesian (x, y, z) → spherical (ρ, θ, φ)
///
/// ρ = √(x² + y² + z²), θ = atan2(y, x), φ = acos(z / ρ).
/// At the origin φ is 0 rather than the 0/0 quotient.
pub fn spherical_from_cartesian(p: Cartesian3) -> Spherical {
    let radius = p.x().hypot(p.y()).hypot(p.z());
    let azimuth = p.y().atan2(p.x());

    let polar_angle = if radius == 0.0 {
        0.0
    } else {
        clamped_acos(p.z() / radius)
    };

    Spherical::new(radius, azimuth, polar_angle)
}

/// Spherical (ρ, θ, φ) → Cartesian (x, y, z)
///
/// x = ρ·sinφ·cosθ, y = ρ·sinφ·sinθ, z = ρ·cosφ
pub fn cartesian_from_spherical(p: Spherical) -> Cartesian3 {
    let (sin_polar, cos_polar) = p.polar_angle().sin_cos();
    let (sin_azimuth, cos_azimuth) = p.azimuth().sin_cos();

    Cartesian3::new(
        p.radius() * sin_polar * cos_azimuth,
        p.radius() * sin_polar * sin_azimuth,
        p.radius() * cos_polar,
    )
}

impl Polar {
    /// Named form of [`polar_from_cartesian`]
    pub fn from_cartesian(p: Cartesian2) -> Self {
        polar_from_cartesian(p)
    }
}

impl Cartesian2 {
    /// Named form of [`cartesian_from_polar`]
    pub fn from_polar(p: Polar) -> Self {
        cartesian_from_polar(p)
    }
}

impl Spherical {
    /// Named form of [`spherical_from_cartesian`]
    pub fn from_cartesian(p: Cartesian3) -> Self {
        spherical_from_cartesian(p)
    }
}

impl Cartesian3 {
    /// Named form of [`cartesian_from_spherical`]
    pub fn from_spherical(p: Spherical) -> Self {
        cartesian_from_spherical(p)
    }
}

impl From<Cartesian2> for Polar {
    fn from(p: Cartesian2) -> Self {
        polar_from_cartesian(p)
    }
}

impl From<Polar> for Cartesian2 {
    fn from(p: Polar) -> Self {
        cartesian_from_polar(p)
    }
}

impl From<Cartesian3> for Spherical {
    fn from(p: Cartesian3) -> Self {
        spherical_from_cartesian(p)
    }
}

impl From<Spherical> for Cartesian3 {
    fn from(p: Spherical) -> Self {
        cartesian_from_spherical(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TOLERANCE;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_polar_from_cartesian_3_4() {
        let p = polar_from_cartesian(Cartesian2::new(3.0, 4.0));
        assert_eq!(p.radius(), 5.0);
        assert!((p.angle() - 4.0_f64.atan2(3.0)).abs() < TOLERANCE);
        assert!((p.angle() - 0.9273).abs() < 1e-4);

        let back = cartesian_from_polar(p);
        assert!(back.max_abs_diff(&Cartesian2::new(3.0, 4.0)) < TOLERANCE);
    }

    #[test]
    fn test_polar_origin() {
        let p = polar_from_cartesian(Cartesian2::ORIGIN);
        assert_eq!(p.radius(), 0.0);
        assert_eq!(p.angle(), 0.0);
        assert_eq!(cartesian_from_polar(p), Cartesian2::ORIGIN);
    }

    #[test]
    fn test_polar_angle_range() {
        let p = polar_from_cartesian(Cartesian2::new(-1.0, 0.0));
        assert!((p.angle() - PI).abs() < TOLERANCE);

        let q = polar_from_cartesian(Cartesian2::new(0.0, -2.0));
        assert!((q.angle() + FRAC_PI_2).abs() < TOLERANCE);
        assert!((q.radius() - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_negative_radius_is_opposite_point() {
        let p = cartesian_from_polar(Polar::new(-2.0, 0.0));
        assert!(p.max_abs_diff(&Cartesian2::new(-2.0, 0.0)) < TOLERANCE);

        let q = cartesian_from_polar(Polar::new(-1.0, FRAC_PI_2));
        assert!(q.max_abs_diff(&Cartesian2::new(0.0, -1.0)) < TOLERANCE);
    }

    #[test]
    fn test_unnormalized_angle() {
        let a = cartesian_from_polar(Polar::new(1.0, 0.5));
        let b = cartesian_from_polar(Polar::new(1.0, 0.5 + 4.0 * PI));
        assert!(a.max_abs_diff(&b) < TOLERANCE);
    }

    #[test]
    fn test_spherical_axes() {
        let z = spherical_from_cartesian(Cartesian3::new(0.0, 0.0, 1.0));
        assert_eq!(z.radius(), 1.0);
        assert_eq!(z.polar_angle(), 0.0);

        let neg_z = spherical_from_cartesian(Cartesian3::new(0.0, 0.0, -3.0));
        assert!((neg_z.polar_angle() - PI).abs() < TOLERANCE);

        let y = spherical_from_cartesian(Cartesian3::new(0.0, 1.0, 0.0));
        assert!((y.azimuth() - FRAC_PI_2).abs() < TOLERANCE);
        assert!((y.polar_angle() - FRAC_PI_2).abs() < TOLERANCE);
    }

    #[test]
    fn test_spherical_origin_guard() {
        let s = spherical_from_cartesian(Cartesian3::ORIGIN);
        assert_eq!(s, Spherical::ORIGIN);
        assert!(!s.polar_angle().is_nan());
        assert_eq!(cartesian_from_spherical(s), Cartesian3::ORIGIN);
    }

    #[test]
    fn test_large_coordinates_do_not_overflow() {
        let p = polar_from_cartesian(Cartesian2::new(1e200, 0.0));
        assert_eq!(p.radius(), 1e200);
        assert_eq!(p.angle(), 0.0);
        assert_eq!(cartesian_from_polar(p), Cartesian2::new(1e200, 0.0));

        let s = spherical_from_cartesian(Cartesian3::new(0.0, 0.0, 1e200));
        assert_eq!(s.radius(), 1e200);
        assert_eq!(s.polar_angle(), 0.0);
    }

    #[test]
    fn test_spherical_roundtrip() {
        let cases = [
            Cartesian3::new(1.0, 0.0, 0.0),
            Cartesian3::new(0.0, 1.0, 0.0),
            Cartesian3::new(0.0, 0.0, 1.0),
            Cartesian3::new(3.0, 4.0, 5.0),
            Cartesian3::new(-2.0, 3.0, -4.0),
            Cartesian3::new(1.0, 1.0, 1.0),
        ];

        for original in cases {
            let back = cartesian_from_spherical(spherical_from_cartesian(original));
            assert!(
                original.max_abs_diff(&back) < TOLERANCE,
                "{} came back as {}",
                original,
                back
            );
        }
    }

    #[test]
    fn test_from_impls_match_free_functions() {
        let c = Cartesian2::new(-2.0, 2.0);
        assert_eq!(Polar::from(c), polar_from_cartesian(c));
        assert_eq!(Polar::from_cartesian(c), polar_from_cartesian(c));

        let s = Spherical::new(2.0, 1.0, 0.5);
        let c3: Cartesian3 = s.into();
        assert_eq!(c3, Cartesian3::from_spherical(s));
    }
}
