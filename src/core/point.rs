//! # Point
//!
//! The four coordinate representations. Each is a plain `Copy` value:
//! built once, never mutated, compared by value.
//!
//! Constructors never validate. A negative radius or a polar angle outside
//! [0, π] is stored as given; the conversion and distance functions are
//! total over such inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `f64::max` ignores NaN; an error measure must not.
fn propagating_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// A point in the plane, Cartesian form
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian2 {
    x: f64,
    y: f64,
}

impl Cartesian2 {
    /// The origin (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new planar point
    ///
    /// # Example
    /// ```
    /// use coordkit::Cartesian2;
    /// let p = Cartesian2::new(3.0, 4.0);
    /// assert_eq!(p.x(), 3.0);
    /// ```
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Largest per-coordinate absolute difference to `other`
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        propagating_max((self.x - other.x).abs(), (self.y - other.y).abs())
    }
}

impl fmt::Display for Cartesian2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cartesian2(x={:.4}, y={:.4})", self.x, self.y)
    }
}

/// A point in the plane, polar form
///
/// `angle` is in radians and is not normalized; any real value is a valid
/// direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    radius: f64,
    angle: f64,
}

impl Polar {
    /// The pole: radius 0, angle 0
    pub const ORIGIN: Self = Self { radius: 0.0, angle: 0.0 };

    pub const fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }

    /// Distance from the pole
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Angle from the +x axis, radians
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polar(r={:.4}, θ={:.4} rad)", self.radius, self.angle)
    }
}

/// A point in space, Cartesian form
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Cartesian3 {
    /// The origin (0, 0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Largest per-coordinate absolute difference to `other`
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        propagating_max(
            propagating_max((self.x - other.x).abs(), (self.y - other.y).abs()),
            (self.z - other.z).abs(),
        )
    }
}

impl fmt::Display for Cartesian3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cartesian3(x={:.4}, y={:.4}, z={:.4})",
            self.x, self.y, self.z
        )
    }
}

/// A point in space, spherical form
///
/// Physics convention:
/// - `azimuth` (θ) is measured in the xy-plane from +x
/// - `polar_angle` (φ) is measured from +z and conventionally lies in [0, π]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    radius: f64,
    azimuth: f64,
    polar_angle: f64,
}

impl Spherical {
    /// The origin, with both angles 0
    pub const ORIGIN: Self = Self {
        radius: 0.0,
        azimuth: 0.0,
        polar_angle: 0.0,
    };

    pub const fn new(radius: f64, azimuth: f64, polar_angle: f64) -> Self {
        Self {
            radius,
            azimuth,
            polar_angle,
        }
    }

    /// Distance from the origin (ρ)
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Angle in the xy-plane from +x (θ)
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Angle from +z (φ)
    pub fn polar_angle(&self) -> f64 {
        self.polar_angle
    }
}

impl fmt::Display for Spherical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Spherical(ρ={:.4}, θ={:.4} rad, φ={:.4} rad)",
            self.radius, self.azimuth, self.polar_angle
        )
    }
}
