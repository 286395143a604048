//!
//! Benchmark metrics.
//!

use crate::classifier::polarity::Polarity;

///
/// A benchmark metric.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Average time per processed path, in nanoseconds.
    AvgTimePerPath,
    /// 95th percentile latency, in nanoseconds.
    P95Latency,
    /// Processed paths per second.
    Throughput,
    /// Mean wall time, in seconds.
    Mean,
    /// Fastest run, in seconds.
    Min,
    /// Slowest run, in seconds.
    Max,
    /// Standard deviation of the wall time, in seconds.
    StdDev,
}

impl Metric {
    ///
    /// The direction in which the metric improves.
    ///
    pub fn polarity(self) -> Polarity {
        match self {
            Self::Throughput => Polarity::HigherIsBetter,
            _ => Polarity::LowerIsBetter,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AvgTimePerPath => write!(f, "avg_time_per_path"),
            Self::P95Latency => write!(f, "p95_latency"),
            Self::Throughput => write!(f, "throughput"),
            Self::Mean => write!(f, "mean"),
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
            Self::StdDev => write!(f, "stddev"),
        }
    }
}

///
/// A flat record of numeric metrics describing one benchmarked item.
///
pub trait MetricRecord {
    /// The metric that decides the summary outcome of an item.
    const PRIMARY: Metric;

    /// The metrics compared in the report table, in column order.
    const COMPARED: &'static [Metric];

    ///
    /// Returns the value of a metric, if the record carries it.
    ///
    fn value(&self, metric: Metric) -> Option<f64>;
}
