//!
//! The coarse outcome of an item, used in the report summary.
//!

///
/// The coarse outcome of an item, used in the report summary.
///
/// Only the primary metric of an item contributes to its outcome.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Better by more than the significance threshold.
    Improvement,
    /// Worse by more than the regression threshold.
    Regression,
    /// Anything in between.
    Neutral,
}
