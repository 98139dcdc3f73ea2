//! # Benchmark Driver
//!
//! Times batched distance computations in each representation over the same
//! seeded geometry.
//!
//! Planar: polar (law of cosines) vs Cartesian (Euclidean).
//! Spatial: spherical chord vs spherical arc vs Cartesian (Euclidean).
//!
//! For per-call statistics use the criterion suite in `benches/`.

use std::hint::black_box;
use std::time::Instant;

use tracing::info;

use super::dataset::{planar_pairs, spatial_pairs};
use crate::core::config::BenchConfig;
use crate::core::metric::{
    Metric, PlanarEuclidean, PolarLawOfCosines, SpatialEuclidean, SphericalArc, SphericalChord,
};
use crate::ports::{BenchSummary, PlanarBench, Report, SpatialBench, TimedBatch};
use crate::Result;

/// Time one metric over one batch
///
/// The distances are passed through `black_box` so the batch cannot be
/// optimized away.
pub fn time_batch<P, M: Metric<P>>(metric: &M, label: &str, pairs: &[(P, P)]) -> TimedBatch {
    let start = Instant::now();
    let distances = metric.batch(black_box(pairs));
    let elapsed = start.elapsed();
    black_box(&distances);

    let batch = TimedBatch::new(metric.name(), label, pairs.len(), elapsed);
    info!(
        metric = metric.name(),
        pairs = pairs.len(),
        seconds = batch.seconds,
        "timed batch"
    );
    batch
}

/// Run the planar benchmark
pub fn bench_planar(config: &BenchConfig) -> Result<PlanarBench> {
    config.validate()?;
    let data = planar_pairs(config.pairs, config.planar_radius, config.seed);

    let polar = time_batch(&PolarLawOfCosines, "Polar (law of cosines)", &data.polar);
    let cartesian = time_batch(&PlanarEuclidean, "Cartesian (Euclidean)", &data.cartesian);

    Ok(PlanarBench::new(polar, cartesian))
}

/// Run the spatial benchmark
pub fn bench_spatial(config: &BenchConfig) -> Result<SpatialBench> {
    config.validate()?;
    let data = spatial_pairs(config.pairs, config.spatial_radius, config.seed);

    let chord = time_batch(&SphericalChord, "Spherical (chord)", &data.spherical);
    let arc = time_batch(&SphericalArc, "Spherical (arc)", &data.spherical);
    let cartesian = time_batch(&SpatialEuclidean, "Cartesian (Euclidean)", &data.cartesian);

    Ok(SpatialBench::new(chord, arc, cartesian))
}

/// Run both benchmarks and hand the results to `report`
pub fn run(config: &BenchConfig, report: &mut dyn Report) -> Result<BenchSummary> {
    config.validate()?;
    info!(pairs = config.pairs, seed = config.seed, "starting benchmarks");

    report.section(&format!("2D benchmark (n = {} pairs)", config.pairs))?;
    let planar = bench_planar(config)?;
    report.planar_bench(&planar)?;

    report.section(&format!("3D benchmark (n = {} pairs)", config.pairs))?;
    let spatial = bench_spatial(config)?;
    report.spatial_bench(&spatial)?;

    Ok(BenchSummary { planar, spatial })
}
