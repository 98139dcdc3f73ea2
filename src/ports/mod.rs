//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! - Ports define WHAT the drivers hand over
//! - Adapters define HOW it is presented
//!
//! The CORE doesn't know about adapters.

mod report;
mod timing;

// Re-export traits
pub use report::Report;

// Re-export types from report
pub use report::{CheckKind, CheckOutcome, VerifySummary};

// Re-export types from timing
pub use timing::{BenchSummary, PlanarBench, SpatialBench, TimedBatch};
