//!
//! The markdown report for hyperfine timings.
//!

use crate::comparison::summary::Highlight;
use crate::comparison::Comparison;
use crate::input::hyperfine::Metrics;
use crate::output::units;

///
/// The markdown report for hyperfine timings.
///
#[derive(Debug)]
pub struct Report<'a> {
    /// The comparison to render.
    pub comparison: &'a Comparison<'a, Metrics>,
    /// The baseline display name.
    pub baseline_name: &'a str,
    /// The current display name.
    pub current_name: &'a str,
    /// The number of paths processed per run, shown in the header.
    pub input_size: Option<u64>,
}

impl<'a> Report<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        comparison: &'a Comparison<'a, Metrics>,
        baseline_name: &'a str,
        current_name: &'a str,
        input_size: Option<u64>,
    ) -> Self {
        Self {
            comparison,
            baseline_name,
            current_name,
            input_size,
        }
    }

    fn write_header(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# 📊 Per-Template Benchmark Analysis")?;
        writeln!(f)?;
        writeln!(f, "**Baseline:** `{}`", self.baseline_name)?;
        writeln!(f, "**Current:** `{}`", self.current_name)?;
        if let Some(input_size) = self.input_size {
            writeln!(
                f,
                "**Input size:** {} paths per run",
                units::thousands(input_size)
            )?;
        }
        writeln!(f, "**Templates analyzed:** {}", self.comparison.rows.len())?;
        writeln!(f)?;
        Ok(())
    }

    fn write_table(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "## Performance Comparison")?;
        writeln!(f)?;
        writeln!(
            f,
            "| Template | Baseline Mean | Current Mean | Change | Min | Max | StdDev | Notes |"
        )?;
        writeln!(
            f,
            "|----------|---------------|--------------|--------|-----|-----|--------|-------|"
        )?;
        for row in self.comparison.rows.iter() {
            let current = row.current;
            let stddev = current
                .stddev
                .map(|stddev| format!("±{}", units::duration_seconds(stddev)))
                .unwrap_or_else(|| "—".to_owned());
            let notes = if current.is_high_variance() {
                "high variance"
            } else {
                "—"
            };
            writeln!(
                f,
                "| `{}` | {} | {} | {} | {} | {} | {stddev} | {notes} |",
                super::escape_cell(row.name),
                units::duration_seconds(row.baseline.mean),
                units::duration_seconds(current.mean),
                row.primary.change,
                units::duration_seconds(current.min),
                units::duration_seconds(current.max),
            )?;
        }
        writeln!(f)?;
        Ok(())
    }

    fn write_highlights(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let summary = &self.comparison.summary;
        if !summary.regressions.is_empty() {
            writeln!(f, "### ⚠️ Performance Regressions")?;
            writeln!(f)?;
            for highlight in summary.regressions.iter() {
                writeln!(
                    f,
                    "- **`{}`**: {:+.1}% slower ({})",
                    highlight.name,
                    highlight.delta.change.percent,
                    Self::transition(highlight)
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
                    "- **`{}`**: {:.1}% faster ({})",
                    highlight.name,
                    highlight.delta.change.percent.abs(),
                    Self::transition(highlight)
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_statistical_notes(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "## Statistical Notes")?;
        writeln!(f)?;
        writeln!(
            f,
            "All measurements include statistical confidence from hyperfine:"
        )?;
        writeln!(f, "- **Mean**: Average execution time across all runs")?;
        writeln!(f, "- **Min/Max**: Fastest and slowest runs observed")?;
        writeln!(f, "- **StdDev**: Standard deviation (measure of consistency)")?;
        writeln!(
            f,
            "- **High variance**: Templates with coefficient of variation >{}%",
            Metrics::HIGH_VARIANCE_PERCENT
        )?;
        writeln!(f)?;
        Ok(())
    }

    fn transition(highlight: &Highlight<'_>) -> String {
        format!(
            "{} → {}",
            units::duration_seconds(highlight.delta.baseline),
            units::duration_seconds(highlight.delta.current)
        )
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_header(f)?;
        self.write_table(f)?;
        super::write_summary(f, "Total templates", &self.comparison.summary)?;
        self.write_highlights(f)?;
        self.write_statistical_notes(f)?;
        super::write_legend(f, &self.comparison.thresholds)
    }
}
