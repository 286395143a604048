//!
//! Markdown comparison reports.
//!

pub mod hyperfine;
pub mod native;

use std::fmt::Write;

use crate::classifier::severity::Severity;
use crate::classifier::thresholds::Thresholds;
use crate::comparison::summary::Summary;

///
/// Escapes an item identifier for use in a table cell.
///
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

///
/// Writes the outcome counts.
///
pub fn write_summary<W>(w: &mut W, total_label: &str, summary: &Summary<'_>) -> std::fmt::Result
where
    W: Write,
{
    writeln!(w, "## Summary")?;
    writeln!(w)?;
    writeln!(w, "- **{total_label}:** {}", summary.total)?;
    writeln!(w, "- **Improvements:** {} 🟢", summary.improvements.len())?;
    writeln!(w, "- **Regressions:** {} 🔴", summary.regressions.len())?;
    writeln!(w, "- **Neutral:** {} ➖", summary.neutral)?;
    writeln!(w)?;
    Ok(())
}

///
/// Writes the severity marker legend.
///
pub fn write_legend<W>(w: &mut W, thresholds: &Thresholds) -> std::fmt::Result
where
    W: Write,
{
    writeln!(w, "---")?;
    writeln!(w)?;
    writeln!(w, "### Legend")?;
    for severity in Severity::LEGEND.into_iter() {
        writeln!(w, "- {} {}", severity.marker(), legend(severity, thresholds))?;
    }
    Ok(())
}

///
/// Describes the range of changes a severity covers.
///
fn legend(severity: Severity, thresholds: &Thresholds) -> String {
    let Thresholds {
        neutral,
        significant,
        warning,
        regression,
    } = thresholds;
    match severity {
        Severity::SignificantImprovement => {
            format!("Significant improvement (>{significant}% faster)")
        }
        Severity::Improvement => format!("Improvement ({neutral}-{significant}% faster)"),
        Severity::Neutral => format!("Neutral (<{neutral}% change)"),
        Severity::Caution => format!("Caution ({neutral}-{warning}% slower)"),
        Severity::Warning => format!("Warning ({warning}-{regression}% slower)"),
        Severity::Regression => format!("Regression (>{regression}% slower)"),
        Severity::Undefined => "Undefined (zero baseline)".to_owned(),
    }
}
