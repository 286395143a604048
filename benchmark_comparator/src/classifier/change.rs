//!
//! A classified change of a single metric.
//!

use crate::classifier::severity::Severity;

///
/// A classified change of a single metric.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Change {
    /// The change in percent, relative to the baseline.
    pub percent: f64,
    /// The severity bucket.
    pub severity: Severity,
}

impl Change {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(percent: f64, severity: Severity) -> Self {
        Self { percent, severity }
    }

    ///
    /// The change for a zero baseline.
    ///
    pub fn undefined() -> Self {
        Self::new(0.0, Severity::Undefined)
    }
}

impl std::fmt::Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:+.1}%", self.severity.marker(), self.percent)
    }
}
