//!
//! The hyperfine comparison arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The hyperfine comparison arguments.
///
#[derive(Debug, Parser)]
#[command(
    name = "compare-hyperfine",
    about = "Compares two hyperfine JSON exports per template and prints a markdown summary",
    arg_required_else_help = true
)]
pub struct Arguments {
    /// Suppresses the warnings.
    #[arg(short, long)]
    pub quiet: bool,

    /// The baseline hyperfine export.
    pub baseline: PathBuf,

    /// The current hyperfine export.
    pub current: PathBuf,

    /// The baseline display name.
    #[arg(long = "baseline-name", default_value = "baseline")]
    pub baseline_name: String,

    /// The current display name.
    #[arg(long = "current-name", default_value = "current")]
    pub current_name: String,

    /// The input size used in the runs. Only shown in the report header.
    #[arg(long)]
    pub size: Option<u64>,

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
