//! # Verification Driver
//!
//! Correctness checks on literal points:
//! - round trips through each curvilinear form
//! - agreement of distances across representations
//!
//! Every check compares the largest absolute error against
//! [`TOLERANCE`](crate::core::TOLERANCE).

use tracing::{debug, warn};

use crate::core::distance::{
    planar_cartesian_distance, polar_distance, spatial_cartesian_distance,
    spherical_chord_distance,
};
use crate::core::{Cartesian2, Cartesian3, Polar, Spherical, TOLERANCE};
use crate::ports::{CheckKind, CheckOutcome, Report, VerifySummary};
use crate::Result;

/// Planar round-trip cases
pub const PLANAR_CASES: [Cartesian2; 5] = [
    Cartesian2::new(1.0, 0.0),
    Cartesian2::new(0.0, 1.0),
    Cartesian2::new(3.0, 4.0),
    Cartesian2::new(-2.0, 2.0),
    Cartesian2::new(5.0, -5.0),
];

/// Spatial round-trip cases
pub const SPATIAL_CASES: [Cartesian3; 6] = [
    Cartesian3::new(1.0, 0.0, 0.0),
    Cartesian3::new(0.0, 1.0, 0.0),
    Cartesian3::new(0.0, 0.0, 1.0),
    Cartesian3::new(3.0, 4.0, 5.0),
    Cartesian3::new(-2.0, 3.0, -4.0),
    Cartesian3::new(1.0, 1.0, 1.0),
];

/// Planar distance-equivalence pair
pub const PLANAR_PAIR: (Cartesian2, Cartesian2) =
    (Cartesian2::new(1.0, 2.0), Cartesian2::new(4.0, 6.0));

/// Spatial distance-equivalence pair
pub const SPATIAL_PAIR: (Cartesian3, Cartesian3) = (
    Cartesian3::new(1.0, 2.0, 3.0),
    Cartesian3::new(4.0, 5.0, 6.0),
);

/// Cartesian → polar → Cartesian
pub fn roundtrip_planar(original: Cartesian2) -> CheckOutcome {
    let polar = Polar::from_cartesian(original);
    let back = Cartesian2::from_polar(polar);
    let error = original.max_abs_diff(&back);

    CheckOutcome::new(
        CheckKind::PlanarRoundTrip,
        vec![
            format!("original:  {}", original),
            format!("converted: {}", polar),
            format!("back:      {}", back),
        ],
        error,
        TOLERANCE,
    )
}

/// Cartesian → spherical → Cartesian
pub fn roundtrip_spatial(original: Cartesian3) -> CheckOutcome {
    let spherical = Spherical::from_cartesian(original);
    let back = Cartesian3::from_spherical(spherical);
    let error = original.max_abs_diff(&back);

    CheckOutcome::new(
        CheckKind::SpatialRoundTrip,
        vec![
            format!("original:  {}", original),
            format!("converted: {}", spherical),
            format!("back:      {}", back),
        ],
        error,
        TOLERANCE,
    )
}

/// Polar distance of the converted pair against the planar Euclidean one
pub fn planar_equivalence(a: Cartesian2, b: Cartesian2) -> CheckOutcome {
    let cartesian = planar_cartesian_distance(&a, &b);
    let polar = polar_distance(&Polar::from_cartesian(a), &Polar::from_cartesian(b));

    CheckOutcome::new(
        CheckKind::PlanarEquivalence,
        vec![
            format!("point 1:   {}", a),
            format!("point 2:   {}", b),
            format!("cartesian: {:.6}", cartesian),
            format!("polar:     {:.6}", polar),
        ],
        (cartesian - polar).abs(),
        TOLERANCE,
    )
}

/// Spherical chord distance of the converted pair against the spatial
/// Euclidean one
pub fn spatial_equivalence(a: Cartesian3, b: Cartesian3) -> CheckOutcome {
    let cartesian = spatial_cartesian_distance(&a, &b);
    let chord = spherical_chord_distance(&Spherical::from_cartesian(a), &Spherical::from_cartesian(b));

    CheckOutcome::new(
        CheckKind::SpatialEquivalence,
        vec![
            format!("point 1:   {}", a),
            format!("point 2:   {}", b),
            format!("cartesian: {:.6}", cartesian),
            format!("chord:     {:.6}", chord),
        ],
        (cartesian - chord).abs(),
        TOLERANCE,
    )
}

fn emit(outcome: CheckOutcome, summary: &mut VerifySummary, report: &mut dyn Report) -> Result<()> {
    if outcome.passed {
        debug!(kind = %outcome.kind, error = outcome.max_error, "check passed");
    } else {
        warn!(kind = %outcome.kind, error = outcome.max_error, "check failed");
    }
    summary.record(&outcome);
    report.check(&outcome)
}

/// Run every check and hand each outcome to `report`
pub fn run(report: &mut dyn Report) -> Result<VerifySummary> {
    let mut summary = VerifySummary::default();

    report.section("2D conversions")?;
    for case in PLANAR_CASES {
        emit(roundtrip_planar(case), &mut summary, report)?;
    }

    report.section("3D conversions")?;
    for case in SPATIAL_CASES {
        emit(roundtrip_spatial(case), &mut summary, report)?;
    }

    report.section("Distance equivalence")?;
    emit(planar_equivalence(PLANAR_PAIR.0, PLANAR_PAIR.1), &mut summary, report)?;
    emit(spatial_equivalence(SPATIAL_PAIR.0, SPATIAL_PAIR.1), &mut summary, report)?;

    report.verify_summary(&summary)?;
    Ok(summary)
}
