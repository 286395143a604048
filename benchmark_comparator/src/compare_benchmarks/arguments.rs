//!
//! The benchmark comparison arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark comparison arguments.
///
#[derive(Debug, Parser)]
#[command(
    name = "compare-benchmarks",
    about = "Compares two throughput benchmark reports and prints a markdown summary",
    arg_required_else_help = true
)]
pub struct Arguments {
    /// Suppresses the warnings.
    #[arg(short, long)]
    pub quiet: bool,

    /// The baseline benchmark report.
    pub baseline: PathBuf,

    /// The current benchmark report.
    pub current: PathBuf,

    /// The output file. If unset, the report is printed to `stdout`.
    #[arg(short, long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Report format: `markdown` or `json`.
    #[arg(long = "output-format", default_value_t = benchmark_comparator::OutputFormat::Markdown)]
    pub output_format: benchmark_comparator::OutputFormat,

    /// Classification thresholds, in percent.
    #[command(flatten)]
    pub thresholds: benchmark_comparator::Thresholds,
}
