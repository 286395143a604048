//!
//! The benchmark comparator library.
//!

pub mod classifier;
pub mod comparison;
pub mod input;
pub mod model;
pub mod output;
pub mod util;

pub use crate::classifier::change::Change;
pub use crate::classifier::outcome::Outcome;
pub use crate::classifier::polarity::Polarity;
pub use crate::classifier::severity::Severity;
pub use crate::classifier::thresholds::Thresholds;
pub use crate::comparison::delta::Delta;
pub use crate::comparison::error::Error as ComparisonError;
pub use crate::comparison::row::Row as ComparisonRow;
pub use crate::comparison::summary::Highlight;
pub use crate::comparison::summary::Summary;
pub use crate::comparison::Comparison;
pub use crate::input::diagnostic::Diagnostic as InputDiagnostic;
pub use crate::input::error::Error as InputError;
pub use crate::input::hyperfine::Metrics as HyperfineMetrics;
pub use crate::input::hyperfine::Report as HyperfineReport;
pub use crate::input::native::Metrics as NativeMetrics;
pub use crate::input::native::Report as NativeReport;
pub use crate::model::metadata::Metadata;
pub use crate::model::metric::Metric;
pub use crate::model::metric::MetricRecord;
pub use crate::model::result_set::ResultSet;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::markdown::hyperfine::Report as HyperfineMarkdown;
pub use crate::output::markdown::native::Report as NativeMarkdown;
pub use crate::output::Output;
