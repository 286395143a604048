//!
//! Comparison of a baseline run with a current run.
//!

pub mod delta;
pub mod error;
pub mod row;
pub mod summary;


use std::collections::BTreeMap;

use crate::classifier::thresholds::Thresholds;
use crate::model::metric::MetricRecord;
use crate::model::result_set::ResultSet;
use crate::util::btreemap::difference_keys;
use crate::util::btreemap::intersect_map;

use self::error::Error;
use self::row::Row;
use self::summary::Summary;

///
/// Comparison of a baseline run with a current run.
///
/// Only items present in both runs are compared. Rows are sorted by item identifier.
///
#[derive(Debug, serde::Serialize)]
pub struct Comparison<'a, R> {
    /// The thresholds used for classification.
    pub thresholds: Thresholds,
    /// One row per common item.
    pub rows: Vec<Row<'a, R>>,
    /// Coarse outcome counts and highlights.
    pub summary: Summary<'a>,
    /// Items missing from the current run.
    pub baseline_only: Vec<&'a str>,
    /// Items missing from the baseline run.
    pub current_only: Vec<&'a str>,
}

impl<'a, R> Comparison<'a, R>
where
    R: MetricRecord,
{
    ///
    /// Joins two result sets by item identifier and classifies every compared metric.
    ///
    pub fn new(
        baseline: &'a ResultSet<R>,
        current: &'a ResultSet<R>,
        thresholds: Thresholds,
    ) -> Result<Self, Error> {
        let baseline_records: BTreeMap<&'a String, &'a R> = baseline.records.iter().collect();
        let current_records: BTreeMap<&'a String, &'a R> = current.records.iter().collect();

        let rows: Vec<Row<'a, R>> = intersect_map(
            baseline_records,
            current_records,
            |name, baseline, current| Row::new(name.as_str(), baseline, current, &thresholds),
        )
        .collect();
        if rows.is_empty() {
            return Err(Error::NoCommonItems);
        }

        let summary = Summary::new(rows.as_slice());
        let baseline_only = difference_keys(&baseline.records, &current.records)
            .map(String::as_str)
            .collect();
        let current_only = difference_keys(&current.records, &baseline.records)
            .map(String::as_str)
            .collect();

        Ok(Self {
            thresholds,
            rows,
            summary,
            baseline_only,
            current_only,
        })
    }

    ///
    /// Describes the items that could not be compared.
    ///
    pub fn unmatched(&self) -> impl Iterator<Item = String> + '_ {
        let baseline_only = self
            .baseline_only
            .iter()
            .map(|name| format!("Template `{name}` is missing from the current results."));
        let current_only = self
            .current_only
            .iter()
            .map(|name| format!("Template `{name}` is missing from the baseline results."));
        baseline_only.chain(current_only)
    }
}
