//!
//! The markdown report for native throughput benchmarks.
//!

use crate::comparison::Comparison;
use crate::input::native::Metrics;
use crate::model::metadata::Metadata;
use crate::model::metric::Metric;
use crate::output::units;

///
/// The markdown report for native throughput benchmarks.
///
#[derive(Debug)]
pub struct Report<'a> {
    /// The comparison to render.
    pub comparison: &'a Comparison<'a, Metrics>,
    /// The baseline run metadata.
    pub baseline: &'a Metadata,
    /// The current run metadata.
    pub current: &'a Metadata,
}

impl<'a> Report<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        comparison: &'a Comparison<'a, Metrics>,
        baseline: &'a Metadata,
        current: &'a Metadata,
    ) -> Self {
        Self {
            comparison,
            baseline,
            current,
        }
    }

    fn write_header(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# 📊 Benchmark Comparison Report")?;
        writeln!(f)?;
        if let Some(input_size) = self.current.input_size {
            writeln!(f, "**Input Size:** {} paths", units::thousands(input_size))?;
            writeln!(f)?;
        }
        for (label, metadata) in [("Baseline", self.baseline), ("Current", self.current)] {
            match metadata.timestamp.as_ref() {
                Some(timestamp) => writeln!(f, "**{label} Timestamp:** {timestamp}")?,
                None => writeln!(f, "**{label} Timestamp:** unknown")?,
            }
        }
        if let (Some(baseline), Some(current)) = (
            self.baseline.version.as_deref(),
            self.current.version.as_deref(),
        ) {
            writeln!(f, "**Tool Version:** {baseline} → {current}")?;
        }
        writeln!(f)?;
        Ok(())
    }

    fn write_table(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "## Performance Comparison")?;
        writeln!(f)?;
        writeln!(
            f,
            "| Template | Avg/Path | Change | p95 | Change | Throughput | Change |"
        )?;
        writeln!(
            f,
            "|----------|----------|--------|-----|--------|------------|--------|"
        )?;
        for row in self.comparison.rows.iter() {
            write!(f, "| {} ", super::escape_cell(row.name))?;
            for metric in [Metric::AvgTimePerPath, Metric::P95Latency, Metric::Throughput] {
                let Some(delta) = row.delta(metric) else {
                    write!(f, "| — | — ")?;
                    continue;
                };
                let value = match metric {
                    Metric::Throughput => units::throughput(delta.current),
                    _ => units::duration_ns(delta.current),
                };
                write!(f, "| {value} | {} ", delta.change)?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f)?;
        Ok(())
    }

    fn write_highlights(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let summary = &self.comparison.summary;
        if !summary.regressions.is_empty() {
            writeln!(f, "### ⚠️ PERFORMANCE REGRESSIONS")?;
            writeln!(f)?;
            for highlight in summary.regressions.iter() {
                writeln!(
                    f,
                    "- **{}**: {:+.1}% slower",
                    highlight.name, highlight.delta.change.percent
                )?;
            }
            writeln!(f)?;
        }
        if !summary.improvements.is_empty() {
            writeln!(f, "### ✨ Performance Improvements")?;
            writeln!(f)?;
            for highlight in summary.improvements.iter() {
                writeln!(
                    f,
                    "- **{}**: {:.1}% faster",
                    highlight.name,
                    highlight.delta.change.percent.abs()
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_header(f)?;
        self.write_table(f)?;
        super::write_summary(f, "Total templates compared", &self.comparison.summary)?;
        self.write_highlights(f)?;
        super::write_legend(f, &self.comparison.thresholds)
    }
}
