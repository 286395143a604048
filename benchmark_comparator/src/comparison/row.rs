//!
//! A comparison table row.
//!

use crate::classifier::change::Change;
use crate::classifier::outcome::Outcome;
use crate::classifier::thresholds::Thresholds;
use crate::comparison::delta::Delta;
use crate::model::metric::Metric;
use crate::model::metric::MetricRecord;

///
/// A comparison table row, pairing the baseline and current records of one item.
///
#[derive(Debug, serde::Serialize)]
pub struct Row<'a, R> {
    /// The item identifier.
    pub name: &'a str,
    /// The baseline record.
    pub baseline: &'a R,
    /// The current record.
    pub current: &'a R,
    /// The changes of the compared metrics, in column order.
    pub deltas: Vec<Delta>,
    /// The change of the primary metric.
    pub primary: Delta,
    /// The coarse outcome, decided by the primary metric.
    pub outcome: Outcome,
}

impl<'a, R> Row<'a, R>
where
    R: MetricRecord,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: &'a str, baseline: &'a R, current: &'a R, thresholds: &Thresholds) -> Self {
        let deltas = R::COMPARED
            .iter()
            .filter_map(|metric| Delta::of(*metric, baseline, current, thresholds))
            .collect();
        let primary = Delta::of(R::PRIMARY, baseline, current, thresholds).unwrap_or(Delta {
            metric: R::PRIMARY,
            baseline: 0.0,
            current: 0.0,
            change: Change::undefined(),
        });
        let outcome = thresholds.outcome(&primary.change, R::PRIMARY.polarity());

        Self {
            name,
            baseline,
            current,
            deltas,
            primary,
            outcome,
        }
    }

    ///
    /// Returns the change of a compared metric.
    ///
    pub fn delta(&self, metric: Metric) -> Option<&Delta> {
        self.deltas.iter().find(|delta| delta.metric == metric)
    }
}
