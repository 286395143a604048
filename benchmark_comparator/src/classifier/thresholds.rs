//!
//! The classification thresholds.
//!

use crate::classifier::change::Change;
use crate::classifier::outcome::Outcome;
use crate::classifier::percent_change;
use crate::classifier::polarity::Polarity;
use crate::classifier::severity::Severity;

///
/// The classification thresholds, in percent.
///
/// All thresholds are exclusive: a change exactly at a threshold falls into the milder bucket.
///
#[derive(Debug, Clone, Copy, PartialEq, clap::Args, serde::Serialize)]
pub struct Thresholds {
    /// Changes below this magnitude are considered noise.
    #[arg(
        long = "neutral-threshold",
        default_value_t = Thresholds::NEUTRAL,
        value_parser = Thresholds::parse_percent
    )]
    pub neutral: f64,
    /// Improvements above this magnitude are significant.
    #[arg(
        long = "significant-threshold",
        default_value_t = Thresholds::SIGNIFICANT,
        value_parser = Thresholds::parse_percent
    )]
    pub significant: f64,
    /// Slowdowns above this magnitude are warnings.
    #[arg(
        long = "warning-threshold",
        default_value_t = Thresholds::WARNING,
        value_parser = Thresholds::parse_percent
    )]
    pub warning: f64,
    /// Slowdowns above this magnitude are regressions.
    #[arg(
        long = "regression-threshold",
        default_value_t = Thresholds::REGRESSION,
        value_parser = Thresholds::parse_percent
    )]
    pub regression: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            neutral: Self::NEUTRAL,
            significant: Self::SIGNIFICANT,
            warning: Self::WARNING,
            regression: Self::REGRESSION,
        }
    }
}

impl Thresholds {
    /// The default noise band.
    pub const NEUTRAL: f64 = 2.0;
    /// The default significant improvement threshold.
    pub const SIGNIFICANT: f64 = 5.0;
    /// The default warning threshold.
    pub const WARNING: f64 = 5.0;
    /// The default regression threshold.
    pub const REGRESSION: f64 = 10.0;

    ///
    /// Parses a threshold given on the command line.
    ///
    pub fn parse_percent(value: &str) -> anyhow::Result<f64> {
        let percent: f64 = value
            .parse()
            .map_err(|error| anyhow::anyhow!("Threshold `{value}` is not a number: {error}"))?;
        anyhow::ensure!(
            percent.is_finite() && percent >= 0.0,
            "Threshold `{value}` must be a finite non-negative percentage"
        );
        Ok(percent)
    }

    ///
    /// Checks that the noise band does not overlap the other buckets.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.neutral <= self.significant,
            "The neutral threshold {}% exceeds the significant threshold {}%",
            self.neutral,
            self.significant
        );
        anyhow::ensure!(
            self.neutral <= self.warning && self.warning <= self.regression,
            "The thresholds must satisfy neutral <= warning <= regression, found {}% <= {}% <= {}%",
            self.neutral,
            self.warning,
            self.regression
        );
        Ok(())
    }

    ///
    /// Computes and classifies the change from `baseline` to `current`.
    ///
    pub fn classify(&self, baseline: f64, current: f64, polarity: Polarity) -> Change {
        match percent_change(baseline, current) {
            Some(percent) => Change::new(percent, self.severity(percent, polarity)),
            None => Change::undefined(),
        }
    }

    ///
    /// Returns the severity bucket of a percentage change.
    ///
    /// The neutral band is checked first, so that small changes never reach the other buckets.
    /// Slowdowns of a lower-is-better metric fall back to caution, while changes of a
    /// higher-is-better metric that match no bucket fall back to neutral.
    ///
    pub fn severity(&self, percent: f64, polarity: Polarity) -> Severity {
        if percent.abs() < self.neutral {
            return Severity::Neutral;
        }

        match polarity {
            Polarity::LowerIsBetter => {
                if percent < -self.significant {
                    Severity::SignificantImprovement
                } else if percent < -self.neutral {
                    Severity::Improvement
                } else if percent > self.regression {
                    Severity::Regression
                } else if percent > self.warning {
                    Severity::Warning
                } else {
                    Severity::Caution
                }
            }
            Polarity::HigherIsBetter => {
                if percent > self.significant {
                    Severity::SignificantImprovement
                } else if percent > self.neutral {
                    Severity::Improvement
                } else if percent < -self.regression {
                    Severity::Regression
                } else if percent < -self.warning {
                    Severity::Warning
                } else if percent < -self.neutral {
                    Severity::Caution
                } else {
                    Severity::Neutral
                }
            }
        }
    }

    ///
    /// Returns the coarse summary outcome of a change.
    ///
    pub fn outcome(&self, change: &Change, polarity: Polarity) -> Outcome {
        let percent = polarity.normalize(change.percent);

        if percent > self.regression {
            Outcome::Regression
        } else if percent < -self.significant {
            Outcome::Improvement
        } else {
            Outcome::Neutral
        }
    }
}
