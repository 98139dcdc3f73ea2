//! # Timing Port
//!
//! Measurements produced by the benchmark driver.
//!
//! Durations are carried as seconds (`f64`) so they serialize as plain
//! numbers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Wall-clock time for one batch of distance computations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedBatch {
    /// Metric name, e.g. `polar_law_of_cosines`
    pub metric: String,

    /// Human-readable label, e.g. `Polar (law of cosines)`
    pub label: String,

    /// Number of pairs in the batch
    pub pairs: usize,

    /// Elapsed seconds for the whole batch
    pub seconds: f64,
}

impl TimedBatch {
    pub fn new(metric: &str, label: &str, pairs: usize, elapsed: Duration) -> Self {
        Self {
            metric: metric.to_string(),
            label: label.to_string(),
            pairs,
            seconds: elapsed.as_secs_f64(),
        }
    }

    /// Mean nanoseconds per pair
    pub fn nanos_per_pair(&self) -> f64 {
        if self.pairs == 0 {
            return 0.0;
        }
        self.seconds * 1e9 / self.pairs as f64
    }
}

/// `num / den`, or 0 when the clock did not register `den`
fn ratio_or_zero(num: f64, den: f64) -> f64 {
    if den <= 0.0 {
        return 0.0;
    }
    num / den
}

/// Planar benchmark: polar law of cosines against Cartesian Euclidean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarBench {
    pub polar: TimedBatch,
    pub cartesian: TimedBatch,

    /// polar / cartesian
    pub ratio: f64,

    /// Label of the faster batch
    pub faster: String,

    /// How much faster, as a percent of the slower time
    pub percent: f64,
}

impl PlanarBench {
    pub fn new(polar: TimedBatch, cartesian: TimedBatch) -> Self {
        let ratio = ratio_or_zero(polar.seconds, cartesian.seconds);
        let (fast, slow) = if polar.seconds < cartesian.seconds {
            (&polar, &cartesian)
        } else {
            (&cartesian, &polar)
        };
        let faster = fast.label.clone();
        let percent = ratio_or_zero(slow.seconds - fast.seconds, slow.seconds) * 100.0;

        Self {
            polar,
            cartesian,
            ratio,
            faster,
            percent,
        }
    }
}

/// Spatial benchmark: spherical chord, spherical arc and Cartesian Euclidean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialBench {
    pub chord: TimedBatch,
    pub arc: TimedBatch,
    pub cartesian: TimedBatch,
}

impl SpatialBench {
    pub fn new(chord: TimedBatch, arc: TimedBatch, cartesian: TimedBatch) -> Self {
        Self {
            chord,
            arc,
            cartesian,
        }
    }

    /// All three batches, fastest first
    pub fn ranking(&self) -> Vec<&TimedBatch> {
        let mut batches = vec![&self.chord, &self.arc, &self.cartesian];
        batches.sort_by(|a, b| a.seconds.total_cmp(&b.seconds));
        batches
    }

    /// slowest / fastest, 0 when the fastest batch measured no time
    pub fn spread(&self) -> f64 {
        let ranking = self.ranking();
        ratio_or_zero(ranking[ranking.len() - 1].seconds, ranking[0].seconds)
    }
}

/// Both benchmarks from one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchSummary {
    pub planar: PlanarBench,
    pub spatial: SpatialBench,
}
