//! # Core Domain
//!
//! Pure math, no I/O.
//!
//! This module contains the fundamental types and operations:
//! - `Cartesian2`, `Polar`, `Cartesian3`, `Spherical` - the four point forms
//! - `convert` - conversions within the planar and spatial pairs
//! - `distance` - the per-representation distance formulas
//! - `Metric` - trait form of those formulas
//!
//! ## Design Principles
//!
//! - All functions are pure (deterministic, no side effects)
//! - No function panics or errors on any floating-point input
//! - Fully testable in isolation

mod point;
pub mod convert;
pub mod distance;
pub mod metric;
pub mod config;

// Re-exports
pub use point::{Cartesian2, Cartesian3, Polar, Spherical};

/// Absolute tolerance for round-trip and cross-representation agreement
pub const TOLERANCE: f64 = 1e-10;

/// Check whether two scalars agree within [`TOLERANCE`]
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-12));
        assert!(!approx_eq(1.0, 1.0 + 1e-9));
        assert!(!approx_eq(f64::NAN, f64::NAN));
    }
}
