//!
//! The benchmark comparison binary.
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

    let baseline: benchmark_comparator::ResultSet<benchmark_comparator::NativeMetrics> =
        benchmark_comparator::NativeReport::try_from(arguments.baseline.as_path())?.into();
    let current: benchmark_comparator::ResultSet<benchmark_comparator::NativeMetrics> =
        benchmark_comparator::NativeReport::try_from(arguments.current.as_path())?.into();
    if !arguments.quiet {
        benchmark_comparator::util::print_warnings(
            baseline
                .warnings(arguments.baseline.as_path())
                .chain(current.warnings(arguments.current.as_path())),
        );
        benchmark_comparator::util::print_warnings(incompatible_versions(
            &baseline.metadata,
            &current.metadata,
        ));
    }

    let comparison =
        benchmark_comparator::Comparison::new(&baseline, &current, arguments.thresholds)?;
    if !arguments.quiet {
        benchmark_comparator::util::print_warnings(comparison.unmatched());
    }

    let report = benchmark_comparator::NativeMarkdown::new(
        &comparison,
        &baseline.metadata,
        &current.metadata,
    );
    let output = benchmark_comparator::Output::new(arguments.output_format, &report, &comparison)?;
    match arguments.output_file {
        Some(path) => output.write_to_file(path.as_path())?,
        None => output.write_to_stdout()?,
    }

    Ok(())
}

///
/// Describes a major version mismatch between the tools that produced the reports.
///
fn incompatible_versions(
    baseline: &benchmark_comparator::Metadata,
    current: &benchmark_comparator::Metadata,
) -> Option<String> {
    let baseline = semver::Version::parse(baseline.version.as_deref()?).ok()?;
    let current = semver::Version::parse(current.version.as_deref()?).ok()?;
    if baseline.major == current.major {
        return None;
    }
    Some(format!(
        "Reports were produced by incompatible tool versions {baseline} and {current}."
    ))
}
