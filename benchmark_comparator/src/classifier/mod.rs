//!
//! The delta classifier.
//!
//! Maps a change between a baseline and a current measurement to a severity bucket.
//!

pub mod change;
pub mod outcome;
pub mod polarity;
pub mod severity;
pub mod thresholds;


use self::change::Change;
use self::polarity::Polarity;
use self::thresholds::Thresholds;

///
/// Classifies the change from `baseline` to `current` with the default thresholds.
///
pub fn classify(baseline: f64, current: f64, polarity: Polarity) -> Change {
    Thresholds::default().classify(baseline, current, polarity)
}

///
/// Returns the percentage change from `baseline` to `current`.
///
/// `None` if the baseline is zero, as the change is not defined.
///
pub fn percent_change(baseline: f64, current: f64) -> Option<f64> {
    if baseline == 0.0 {
        return None;
    }
    Some((current - baseline) / baseline * 100.0)
}
