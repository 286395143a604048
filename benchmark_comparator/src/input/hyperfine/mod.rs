//!
//! The hyperfine JSON export.
//!

pub mod command;
pub mod run;

use std::path::Path;

use crate::input::diagnostic::Diagnostic;
use crate::input::error::Error as InputError;
use crate::model::metric::Metric;
use crate::model::metric::MetricRecord;
use crate::model::result_set::ResultSet;

use self::run::Run;

///
/// The hyperfine JSON export, as written by `hyperfine --export-json`.
///
#[derive(Debug, serde::Deserialize)]
pub struct Report {
    /// One entry per benchmarked command.
    pub results: Vec<Run>,
}

///
/// The metrics compared for a hyperfine item. All values are in seconds.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Metrics {
    /// Mean wall time.
    pub mean: f64,
    /// Fastest run.
    pub min: f64,
    /// Slowest run.
    pub max: f64,
    /// Standard deviation. Absent for a single run.
    pub stddev: Option<f64>,
}

impl Metrics {
    /// Runs varying by more than this percentage of the mean are flagged as noisy.
    pub const HIGH_VARIANCE_PERCENT: f64 = 10.0;

    ///
    /// The coefficient of variation in percent, if defined.
    ///
    pub fn coefficient_of_variation(&self) -> Option<f64> {
        let stddev = self.stddev?;
        if self.mean > 0.0 {
            Some(stddev / self.mean * 100.0)
        } else {
            None
        }
    }

    ///
    /// Whether the runs are too noisy to trust small changes.
    ///
    pub fn is_high_variance(&self) -> bool {
        self.coefficient_of_variation()
            .is_some_and(|variation| variation > Self::HIGH_VARIANCE_PERCENT)
    }
}

impl MetricRecord for Metrics {
    const PRIMARY: Metric = Metric::Mean;

    const COMPARED: &'static [Metric] = &[Metric::Mean];

    fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Mean => Some(self.mean),
            Metric::Min => Some(self.min),
            Metric::Max => Some(self.max),
            Metric::StdDev => self.stddev,
            _ => None,
        }
    }
}

impl From<&Run> for Metrics {
    fn from(run: &Run) -> Self {
        Self {
            mean: run.mean,
            min: run.min,
            max: run.max,
            stddev: run.stddev,
        }
    }
}

impl TryFrom<&Path> for Report {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        crate::input::read_json(path)
    }
}

impl From<Report> for ResultSet<Metrics> {
    fn from(report: Report) -> Self {
        let mut result_set = ResultSet::default();

        for (index, run) in report.results.iter().enumerate() {
            let name = match command::template(run.command.as_str()) {
                Some(template) => template.to_owned(),
                None => {
                    let name = command::unknown(index + 1);
                    result_set.diagnostics.push(Diagnostic::MissingTemplate {
                        command: run.command.clone(),
                        name: name.clone(),
                    });
                    name
                }
            };
            result_set.insert(name, Metrics::from(run));
        }

        result_set
    }
}
