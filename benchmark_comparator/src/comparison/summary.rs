//!
//! The comparison summary.
//!

use crate::classifier::outcome::Outcome;
use crate::comparison::delta::Delta;
use crate::comparison::row::Row;

///
/// The comparison summary.
///
#[derive(Debug, Default, serde::Serialize)]
pub struct Summary<'a> {
    /// The number of compared items.
    pub total: usize,
    /// Improved items, best first.
    pub improvements: Vec<Highlight<'a>>,
    /// Regressed items, worst first.
    pub regressions: Vec<Highlight<'a>>,
    /// The number of items with neither outcome.
    pub neutral: usize,
}

///
/// An item singled out in the summary.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Highlight<'a> {
    /// The item identifier.
    pub name: &'a str,
    /// The change of the primary metric.
    #[serde(flatten)]
    pub delta: Delta,
}

impl<'a> Summary<'a> {
    ///
    /// Collects the coarse outcomes of the rows.
    ///
    pub fn new<R>(rows: &[Row<'a, R>]) -> Self {
        let mut summary = Self {
            total: rows.len(),
            ..Self::default()
        };

        for row in rows.iter() {
            let highlight = Highlight {
                name: row.name,
                delta: row.primary,
            };
            match row.outcome {
                Outcome::Improvement => summary.improvements.push(highlight),
                Outcome::Regression => summary.regressions.push(highlight),
                Outcome::Neutral => summary.neutral += 1,
            }
        }

        // Stable sorts, so that ties keep the identifier order.
        summary
            .regressions
            .sort_by(|a, b| b.delta.change.percent.total_cmp(&a.delta.change.percent));
        summary
            .improvements
            .sort_by(|a, b| a.delta.change.percent.total_cmp(&b.delta.change.percent));

        summary
    }
}
