//! # coordkit
//!
//! Planar and spatial points in Cartesian, polar and spherical form, with the
//! distance formula native to each form and a harness for comparing their
//! cost.
//!
//! ## Overview
//!
//! - **Coordinate model**: `Cartesian2 ↔ Polar`, `Cartesian3 ↔ Spherical`
//! - **Distance engine**: Euclidean, law of cosines, spherical chord,
//!   great-circle arc
//! - **Drivers**: seeded benchmarks and correctness checks, reported to the
//!   console or as JSON
//!
//! Conversions round-trip within 1e-10 and the distance formulas agree across
//! representations within the same tolerance.
//!
//! ## Rust Usage
//!
//! ```rust
//! use coordkit::{polar_distance, planar_cartesian_distance, Cartesian2, Polar};
//!
//! let a = Cartesian2::new(1.0, 2.0);
//! let b = Cartesian2::new(4.0, 6.0);
//!
//! let d_cart = planar_cartesian_distance(&a, &b);
//! let d_polar = polar_distance(&Polar::from(a), &Polar::from(b));
//! assert!((d_cart - d_polar).abs() < coordkit::TOLERANCE);
//! ```
//!
//! ## Python Usage
//!
//! Build with `--features python`:
//!
//! ```python
//! from coordkit import Spherical, spherical_arc_distance
//! spherical_arc_distance(Spherical(10, 0, 1.5708), Spherical(10, 1.5708, 1.5708))
//! ```

pub mod core;
pub mod ports;
pub mod adapters;

// Re-exports for convenience
pub use crate::core::convert::{
    cartesian_from_polar, cartesian_from_spherical, polar_from_cartesian,
    spherical_from_cartesian,
};
pub use crate::core::distance::{
    planar_cartesian_distance, polar_distance, spatial_cartesian_distance,
    spherical_arc_distance, spherical_chord_distance,
};
pub use crate::core::config::{BenchConfig, RadiusRange};
pub use crate::core::metric::Metric;
pub use crate::core::{Cartesian2, Cartesian3, Polar, Spherical, TOLERANCE};
pub use ports::{Report, VerifySummary};

/// Result type for driver and reporter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the drivers and reporters
///
/// The core math never fails; these come from configuration and output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
