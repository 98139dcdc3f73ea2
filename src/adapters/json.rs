//! # JSON Reporter
//!
//! Buffers everything it receives and writes a single JSON document on
//! `finish`.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::ports::{CheckOutcome, PlanarBench, Report, SpatialBench, VerifySummary};
use crate::Result;

/// Shape of the emitted document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonDocument {
    pub sections: Vec<String>,
    pub checks: Vec<CheckOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<VerifySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planar: Option<PlanarBench>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spatial: Option<SpatialBench>,
}

/// Collects reports and writes them as pretty-printed JSON
pub struct JsonReport<W: Write> {
    out: W,
    doc: JsonDocument,
}

impl JsonReport<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            doc: JsonDocument::default(),
        }
    }

    /// What has been collected so far
    pub fn document(&self) -> &JsonDocument {
        &self.doc
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for JsonReport<W> {
    fn section(&mut self, title: &str) -> Result<()> {
        self.doc.sections.push(title.to_string());
        Ok(())
    }

    fn check(&mut self, outcome: &CheckOutcome) -> Result<()> {
        self.doc.checks.push(outcome.clone());
        Ok(())
    }

    fn planar_bench(&mut self, bench: &PlanarBench) -> Result<()> {
        self.doc.planar = Some(bench.clone());
        Ok(())
    }

    fn spatial_bench(&mut self, bench: &SpatialBench) -> Result<()> {
        self.doc.spatial = Some(bench.clone());
        Ok(())
    }

    fn verify_summary(&mut self, summary: &VerifySummary) -> Result<()> {
        self.doc.verify = Some(*summary);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.doc)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
