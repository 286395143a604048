//!
//! A classified change of one metric of one item.
//!

use crate::classifier::change::Change;
use crate::classifier::thresholds::Thresholds;
use crate::model::metric::Metric;
use crate::model::metric::MetricRecord;

///
/// A classified change of one metric of one item.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Delta {
    /// The compared metric.
    pub metric: Metric,
    /// The baseline value.
    pub baseline: f64,
    /// The current value.
    pub current: f64,
    /// The classified change.
    #[serde(flatten)]
    pub change: Change,
}

impl Delta {
    ///
    /// Compares `metric` between two records.
    ///
    /// Returns `None` if either record does not carry the metric.
    ///
    pub fn of<R>(metric: Metric, baseline: &R, current: &R, thresholds: &Thresholds) -> Option<Self>
    where
        R: MetricRecord,
    {
        let baseline = baseline.value(metric)?;
        let current = current.value(metric)?;
        Some(Self {
            metric,
            baseline,
            current,
            change: thresholds.classify(baseline, current, metric.polarity()),
        })
    }
}
