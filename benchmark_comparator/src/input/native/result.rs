//!
//! The native benchmark result for one input size.
//!

///
/// The native benchmark result for one input size.
///
/// Durations are serialized as integer nanoseconds.
/// Fields not used in comparisons are ignored.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct BenchmarkResult {
    /// The number of paths processed.
    pub input_size: u64,
    /// Average time per path.
    pub avg_time_per_path: f64,
    /// Paths per second.
    pub throughput_paths_per_sec: f64,
    /// Per-path latency distribution.
    pub latency_stats: LatencyStatistics,
}

///
/// Per-path latency distribution.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LatencyStatistics {
    /// 95th percentile.
    pub p95: f64,
}
