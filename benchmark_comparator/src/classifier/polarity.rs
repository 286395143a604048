//!
//! The direction in which a metric improves.
//!

///
/// The direction in which a metric improves.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    /// Latencies and durations.
    LowerIsBetter,
    /// Throughput.
    HigherIsBetter,
}

impl Polarity {
    ///
    /// Normalizes a percentage change so that negative values always mean an improvement.
    ///
    pub fn normalize(self, percent: f64) -> f64 {
        match self {
            Self::LowerIsBetter => percent,
            Self::HigherIsBetter => -percent,
        }
    }
}
