//! Python Bindings for coordkit
//!
//! Exposes the point types, conversions and distance formulas via PyO3.
//!
//! ## Usage
//! ```python
//! from coordkit import Cartesian2, Polar, polar_distance
//!
//! p = Polar.from_cartesian(Cartesian2(3.0, 4.0))
//! p.radius   # 5.0
//! polar_distance(p, Polar(1.0, 0.0))
//! ```

use pyo3::prelude::*;

use crate::core::distance;
use crate::core::{Cartesian2, Cartesian3, Polar, Spherical};

// =============================================================================
// Planar
// =============================================================================

#[pyclass(name = "Cartesian2", frozen)]
#[derive(Clone, Copy)]
pub struct PyCartesian2 {
    inner: Cartesian2,
}

#[pymethods]
impl PyCartesian2 {
    #[new]
    fn new(x: f64, y: f64) -> Self {
        Self { inner: Cartesian2::new(x, y) }
    }

    #[getter]
    fn x(&self) -> f64 {
        self.inner.x()
    }

    #[getter]
    fn y(&self) -> f64 {
        self.inner.y()
    }

    #[staticmethod]
    fn from_polar(p: &PyPolar) -> Self {
        Self { inner: Cartesian2::from_polar(p.inner) }
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyclass(name = "Polar", frozen)]
#[derive(Clone, Copy)]
pub struct PyPolar {
    inner: Polar,
}

#[pymethods]
impl PyPolar {
    #[new]
    fn new(radius: f64, angle: f64) -> Self {
        Self { inner: Polar::new(radius, angle) }
    }

    #[getter]
    fn radius(&self) -> f64 {
        self.inner.radius()
    }

    #[getter]
    fn angle(&self) -> f64 {
        self.inner.angle()
    }

    #[staticmethod]
    fn from_cartesian(p: &PyCartesian2) -> Self {
        Self { inner: Polar::from_cartesian(p.inner) }
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

// =============================================================================
// Spatial
// =============================================================================

#[pyclass(name = "Cartesian3", frozen)]
#[derive(Clone, Copy)]
pub struct PyCartesian3 {
    inner: Cartesian3,
}

#[pymethods]
impl PyCartesian3 {
    #[new]
    fn new(x: f64, y: f64, z: f64) -> Self {
        Self { inner: Cartesian3::new(x, y, z) }
    }

    #[getter]
    fn x(&self) -> f64 {
        self.inner.x()
    }

    #[getter]
    fn y(&self) -> f64 {
        self.inner.y()
    }

    #[getter]
    fn z(&self) -> f64 {
        self.inner.z()
    }

    #[staticmethod]
    fn from_spherical(p: &PySpherical) -> Self {
        Self { inner: Cartesian3::from_spherical(p.inner) }
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyclass(name = "Spherical", frozen)]
#[derive(Clone, Copy)]
pub struct PySpherical {
    inner: Spherical,
}

#[pymethods]
impl PySpherical {
    #[new]
    fn new(radius: f64, azimuth: f64, polar_angle: f64) -> Self {
        Self { inner: Spherical::new(radius, azimuth, polar_angle) }
    }

    #[getter]
    fn radius(&self) -> f64 {
        self.inner.radius()
    }

    #[getter]
    fn azimuth(&self) -> f64 {
        self.inner.azimuth()
    }

    #[getter]
    fn polar_angle(&self) -> f64 {
        self.inner.polar_angle()
    }

    #[staticmethod]
    fn from_cartesian(p: &PyCartesian3) -> Self {
        Self { inner: Spherical::from_cartesian(p.inner) }
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

// =============================================================================
// Distances
// =============================================================================

#[pyfunction]
fn planar_cartesian_distance(a: &PyCartesian2, b: &PyCartesian2) -> f64 {
    distance::planar_cartesian_distance(&a.inner, &b.inner)
}

#[pyfunction]
fn polar_distance(a: &PyPolar, b: &PyPolar) -> f64 {
    distance::polar_distance(&a.inner, &b.inner)
}

#[pyfunction]
fn spatial_cartesian_distance(a: &PyCartesian3, b: &PyCartesian3) -> f64 {
    distance::spatial_cartesian_distance(&a.inner, &b.inner)
}

#[pyfunction]
fn spherical_chord_distance(a: &PySpherical, b: &PySpherical) -> f64 {
    distance::spherical_chord_distance(&a.inner, &b.inner)
}

#[pyfunction]
fn spherical_arc_distance(a: &PySpherical, b: &PySpherical) -> f64 {
    distance::spherical_arc_distance(&a.inner, &b.inner)
}

// =============================================================================
// Module
// =============================================================================

#[pymodule]
fn coordkit(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyCartesian2>()?;
    m.add_class::<PyPolar>()?;
    m.add_class::<PyCartesian3>()?;
    m.add_class::<PySpherical>()?;

    m.add_function(wrap_pyfunction!(planar_cartesian_distance, m)?)?;
    m.add_function(wrap_pyfunction!(polar_distance, m)?)?;
    m.add_function(wrap_pyfunction!(spatial_cartesian_distance, m)?)?;
    m.add_function(wrap_pyfunction!(spherical_chord_distance, m)?)?;
    m.add_function(wrap_pyfunction!(spherical_arc_distance, m)?)?;

    Ok(())
}
