//!
//! The native throughput benchmark report.
//!

pub mod result;

use std::path::Path;

use crate::input::diagnostic::Diagnostic;
use crate::input::error::Error as InputError;
use crate::model::metadata::Metadata;
use crate::model::metadata::Timestamp;
use crate::model::metric::Metric;
use crate::model::metric::MetricRecord;
use crate::model::result_set::ResultSet;

use self::result::BenchmarkResult;

///
/// The native throughput benchmark report.
///
#[derive(Debug, serde::Deserialize)]
pub struct Report {
    /// The benchmark tool version.
    #[serde(default)]
    pub version: Option<String>,
    /// The run timestamp.
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
    /// Per-template benchmarks.
    pub benchmarks: Vec<TemplateBenchmark>,
}

///
/// Results of one template over a series of input sizes.
///
#[derive(Debug, serde::Deserialize)]
pub struct TemplateBenchmark {
    /// The template identifier.
    pub template_name: String,
    /// Results ordered by increasing input size.
    pub results: Vec<BenchmarkResult>,
}

///
/// The metrics compared for a native benchmark item.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Metrics {
    /// The number of paths processed.
    pub input_size: u64,
    /// Average time per path, in nanoseconds.
    pub avg_time_per_path: f64,
    /// 95th percentile latency, in nanoseconds.
    pub p95_latency: f64,
    /// Paths per second.
    pub throughput: f64,
}

impl MetricRecord for Metrics {
    const PRIMARY: Metric = Metric::AvgTimePerPath;

    const COMPARED: &'static [Metric] = &[
        Metric::AvgTimePerPath,
        Metric::P95Latency,
        Metric::Throughput,
    ];

    fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::AvgTimePerPath => Some(self.avg_time_per_path),
            Metric::P95Latency => Some(self.p95_latency),
            Metric::Throughput => Some(self.throughput),
            _ => None,
        }
    }
}

impl From<&BenchmarkResult> for Metrics {
    fn from(result: &BenchmarkResult) -> Self {
        Self {
            input_size: result.input_size,
            avg_time_per_path: result.avg_time_per_path,
            p95_latency: result.latency_stats.p95,
            throughput: result.throughput_paths_per_sec,
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
        let input_size = report
            .benchmarks
            .first()
            .and_then(|benchmark| benchmark.results.last())
            .map(|result| result.input_size);

        let mut result_set = ResultSet {
            metadata: Metadata {
                timestamp: report.timestamp,
                version: report.version,
                input_size,
            },
            ..ResultSet::default()
        };

        for benchmark in report.benchmarks.into_iter() {
            // The last result corresponds to the largest input size.
            match benchmark.results.last() {
                Some(result) => result_set.insert(benchmark.template_name, Metrics::from(result)),
                None => result_set.diagnostics.push(Diagnostic::EmptyResults {
                    name: benchmark.template_name,
                }),
            }
        }

        result_set
    }
}
