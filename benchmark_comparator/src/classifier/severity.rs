//!
//! The severity bucket of a change.
//!

///
/// The severity bucket of a change.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Better by more than the significance threshold.
    SignificantImprovement,
    /// Better, but within the significance threshold.
    Improvement,
    /// Within the noise band.
    Neutral,
    /// Slightly worse.
    Caution,
    /// Worse by more than the warning threshold.
    Warning,
    /// Worse by more than the regression threshold.
    Regression,
    /// The baseline is zero.
    Undefined,
}

impl Severity {
    /// Every severity that appears in the report legend, from best to worst.
    pub const LEGEND: [Self; 6] = [
        Self::SignificantImprovement,
        Self::Improvement,
        Self::Neutral,
        Self::Caution,
        Self::Warning,
        Self::Regression,
    ];

    ///
    /// The marker shown next to a change in report tables.
    ///
    pub fn marker(self) -> &'static str {
        match self {
            Self::SignificantImprovement => "🟢",
            Self::Improvement => "✅",
            Self::Neutral => "➖",
            Self::Caution => "🟡",
            Self::Warning => "⚠️",
            Self::Regression => "🔴",
            Self::Undefined => "➖",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignificantImprovement => write!(f, "significant-improvement"),
            Self::Improvement => write!(f, "improvement"),
            Self::Neutral => write!(f, "neutral"),
            Self::Caution => write!(f, "caution"),
            Self::Warning => write!(f, "warning"),
            Self::Regression => write!(f, "regression"),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}
