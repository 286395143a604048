//!
//! The hyperfine comparison binary.
//!

pub(crate) mod arguments;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();
    arguments.thresholds.validate()?;

    let baseline: benchmark_comparator::ResultSet<benchmark_comparator::HyperfineMetrics> =
        benchmark_comparator::HyperfineReport::try_from(arguments.baseline.as_path())?.into();
    let current: benchmark_comparator::ResultSet<benchmark_comparator::HyperfineMetrics> =
        benchmark_comparator::HyperfineReport::try_from(arguments.current.as_path())?.into();
    if !arguments.quiet {
        benchmark_comparator::util::print_warnings(
            baseline
                .warnings(arguments.baseline.as_path())
                .chain(current.warnings(arguments.current.as_path())),
        );
    }

    let comparison =
        benchmark_comparator::Comparison::new(&baseline, &current, arguments.thresholds)?;
    if !arguments.quiet {
        benchmark_comparator::util::print_warnings(comparison.unmatched());
    }

    let report = benchmark_comparator::HyperfineMarkdown::new(
        &comparison,
        arguments.baseline_name.as_str(),
        arguments.current_name.as_str(),
        arguments.size,
    );
    let output = benchmark_comparator::Output::new(arguments.output_format, &report, &comparison)?;
    match arguments.output_file {
        Some(path) => output.write_to_file(path.as_path())?,
        None => output.write_to_stdout()?,
    }

    Ok(())
}
