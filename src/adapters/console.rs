//! # Console Reporter
//!
//! Human-readable output: boxed section headers, one block per check,
//! timing tables for the benchmarks.

use std::io::{self, Write};

use crate::ports::{CheckOutcome, PlanarBench, Report, SpatialBench, VerifySummary};
use crate::Result;

const RULE_WIDTH: usize = 70;

/// Writes reports as plain text
pub struct ConsoleReport<W: Write> {
    out: W,
    checks_in_section: usize,
}

impl ConsoleReport<io::Stdout> {
    /// Report to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            checks_in_section: 0,
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self, ch: char) -> Result<()> {
        writeln!(self.out, "{}", ch.to_string().repeat(RULE_WIDTH))?;
        Ok(())
    }
}

impl<W: Write> Report for ConsoleReport<W> {
    fn section(&mut self, title: &str) -> Result<()> {
        self.checks_in_section = 0;
        writeln!(self.out)?;
        self.rule('=')?;
        writeln!(self.out, "{}", title.to_uppercase())?;
        self.rule('=')?;
        Ok(())
    }

    fn check(&mut self, outcome: &CheckOutcome) -> Result<()> {
        self.checks_in_section += 1;
        writeln!(self.out)?;
        writeln!(self.out, "Check {} ({}):", self.checks_in_section, outcome.kind)?;
        for step in &outcome.steps {
            writeln!(self.out, "  {}", step)?;
        }
        writeln!(self.out, "  error: {:.2e}", outcome.max_error)?;
        if outcome.passed {
            writeln!(self.out, "  ✓ PASS")?;
        } else {
            writeln!(self.out, "  ✗ FAIL (tolerance {:.0e})", outcome.tolerance)?;
        }
        Ok(())
    }

    fn planar_bench(&mut self, bench: &PlanarBench) -> Result<()> {
        writeln!(self.out)?;
        for (tag, batch) in [("A", &bench.polar), ("B", &bench.cartesian)] {
            writeln!(
                self.out,
                "[{}] {:<28} {:>12.6} s  ({:.1} ns/pair)",
                tag,
                batch.label,
                batch.seconds,
                batch.nanos_per_pair()
            )?;
        }
        writeln!(self.out)?;
        self.rule('-')?;
        writeln!(self.out, "  Ratio (polar / cartesian): {:.2}x", bench.ratio)?;
        writeln!(
            self.out,
            "  Faster: {} (by {:.1}%)",
            bench.faster, bench.percent
        )?;
        Ok(())
    }

    fn spatial_bench(&mut self, bench: &SpatialBench) -> Result<()> {
        writeln!(self.out)?;
        for (tag, batch) in [("A", &bench.chord), ("B", &bench.arc), ("C", &bench.cartesian)] {
            writeln!(
                self.out,
                "[{}] {:<28} {:>12.6} s  ({:.1} ns/pair)",
                tag,
                batch.label,
                batch.seconds,
                batch.nanos_per_pair()
            )?;
        }
        writeln!(self.out)?;
        self.rule('-')?;
        writeln!(self.out, "  Ranking by speed:")?;
        for (i, batch) in bench.ranking().iter().enumerate() {
            writeln!(self.out, "    {}. {}: {:.6} s", i + 1, batch.label, batch.seconds)?;
        }
        writeln!(self.out, "  Slowest / fastest: {:.2}x", bench.spread())?;
        Ok(())
    }

    fn verify_summary(&mut self, summary: &VerifySummary) -> Result<()> {
        writeln!(self.out)?;
        self.rule('=')?;
        writeln!(
            self.out,
            "CHECKS: {} passed, {} failed, {} total",
            summary.passed,
            summary.failed,
            summary.total()
        )?;
        self.rule('=')?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CheckKind, TimedBatch};
    use std::time::Duration;

    fn render(f: impl FnOnce(&mut ConsoleReport<Vec<u8>>)) -> String {
        let mut report = ConsoleReport::new(Vec::new());
        f(&mut report);
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn test_section_header() {
        let text = render(|r| r.section("2D conversions").unwrap());
        assert!(text.contains("2D CONVERSIONS"));
        assert!(text.contains(&"=".repeat(RULE_WIDTH)));
    }

    #[test]
    fn test_check_numbering_resets_per_section() {
        let outcome = CheckOutcome::new(
            CheckKind::PlanarRoundTrip,
            vec!["original:  Cartesian2(x=1.0000, y=0.0000)".into()],
            0.0,
            1e-10,
        );
        let text = render(|r| {
            r.section("one").unwrap();
            r.check(&outcome).unwrap();
            r.check(&outcome).unwrap();
            r.section("two").unwrap();
            r.check(&outcome).unwrap();
        });
        assert_eq!(text.matches("Check 1 (2D round trip)").count(), 2);
        assert_eq!(text.matches("Check 2").count(), 1);
        assert!(text.contains("✓ PASS"));
        assert!(text.contains("  original:  Cartesian2(x=1.0000, y=0.0000)"));
    }

    #[test]
    fn test_failed_check() {
        let outcome = CheckOutcome::new(CheckKind::SpatialEquivalence, vec![], 0.5, 1e-10);
        let text = render(|r| r.check(&outcome).unwrap());
        assert!(text.contains("✗ FAIL"));
        assert!(text.contains("5.00e-1"));
    }

    #[test]
    fn test_bench_tables() {
        let batch = |label: &str, ms| TimedBatch::new(label, label, 100, Duration::from_millis(ms));
        let planar = PlanarBench::new(batch("polar", 20), batch("cartesian", 10));
        let spatial = SpatialBench::new(batch("chord", 20), batch("arc", 30), batch("cartesian", 10));

        let text = render(|r| {
            r.planar_bench(&planar).unwrap();
            r.spatial_bench(&spatial).unwrap();
        });

        assert!(text.contains("Ratio (polar / cartesian): 2.00x"));
        assert!(text.contains("Faster: cartesian (by 50.0%)"));
        assert!(text.contains("1. cartesian"));
        assert!(text.contains("3. arc"));
        assert!(text.contains("Slowest / fastest: 3.00x"));
    }

    #[test]
    fn test_summary_line() {
        let summary = VerifySummary { passed: 12, failed: 1 };
        let text = render(|r| r.verify_summary(&summary).unwrap());
        assert!(text.contains("CHECKS: 12 passed, 1 failed, 13 total"));
    }
}
