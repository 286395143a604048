//!
//! A single hyperfine benchmark entry.
//!

use serde::Deserialize;

///
/// A single hyperfine benchmark entry.
///
/// All timings are in seconds. Fields not used in comparisons are ignored.
///
#[derive(Debug, Clone, Deserialize)]
pub struct Run {
    /// The benchmarked command line.
    pub command: String,
    /// Mean wall time.
    pub mean: f64,
    /// Standard deviation of the wall time.
    /// Required, but hyperfine writes `null` for a single run.
    #[serde(deserialize_with = "Option::deserialize")]
    pub stddev: Option<f64>,
    /// Fastest run.
    pub min: f64,
    /// Slowest run.
    pub max: f64,
}
