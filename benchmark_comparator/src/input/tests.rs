//!
//! The benchmark input tests.
//!

use std::io::Write;

use super::diagnostic::Diagnostic;
use super::error::Error as InputError;
use super::hyperfine;
use super::hyperfine::command;
use super::native;
use crate::model::metadata::Timestamp;
use crate::model::metric::Metric;
use crate::model::metric::MetricRecord;
use crate::model::result_set::ResultSet;

const NATIVE_REPORT: &str = r#"
{
    "version": "1.0.0",
    "timestamp": 1700000000,
    "benchmarks": [
        {
            "template_name": "upper",
            "results": [
                {
                    "input_size": 100,
                    "parse_time": 1200,
                    "total_format_time": 90000,
                    "avg_time_per_path": 900,
                    "throughput_paths_per_sec": 1111111.1,
                    "parse_percentage": 1.3,
                    "latency_stats": { "min": 500, "p50": 850, "p95": 1500, "p99": 2000, "max": 4000, "stddev": 120.5, "sample_count": 100 }
                },
                {
                    "input_size": 10000,
                    "avg_time_per_path": 850,
                    "throughput_paths_per_sec": 1176470.5,
                    "latency_stats": { "p95": 1400 }
                }
            ]
        },
        {
            "template_name": "split",
            "results": []
        }
    ]
}
"#;

const HYPERFINE_REPORT: &str = r#"
{
    "results": [
        {
            "command": "bench --template {upper} --size 1000 --output /dev/null",
            "mean": 0.0123,
            "stddev": 0.0004,
            "median": 0.0122,
            "user": 0.01,
            "system": 0.002,
            "min": 0.0118,
            "max": 0.0131,
            "times": [0.0118, 0.0131],
            "exit_codes": [0, 0]
        },
        {
            "command": "bench --size 1000",
            "mean": 0.5,
            "stddev": null,
            "min": 0.5,
            "max": 0.5
        }
    ]
}
"#;

#[test]
fn native_takes_last_result() {
    let report: native::Report = serde_json::from_str(NATIVE_REPORT).expect("Valid report");
    let result_set = ResultSet::<native::Metrics>::from(report);

    let upper = result_set.records.get("upper").expect("Always exists");
    assert_eq!(upper.input_size, 10000);
    assert_eq!(upper.value(Metric::AvgTimePerPath), Some(850.0));
    assert_eq!(upper.value(Metric::P95Latency), Some(1400.0));
    assert_eq!(upper.value(Metric::Throughput), Some(1176470.5));
    assert_eq!(upper.value(Metric::Mean), None);
}

#[test]
fn native_omits_empty_results() {
    let report: native::Report = serde_json::from_str(NATIVE_REPORT).expect("Valid report");
    let result_set = ResultSet::<native::Metrics>::from(report);

    assert_eq!(result_set.len(), 1);
    assert!(!result_set.records.contains_key("split"));
    assert_eq!(
        result_set.diagnostics,
        vec![Diagnostic::EmptyResults {
            name: "split".to_owned()
        }]
    );
}

#[test]
fn native_metadata() {
    let report: native::Report = serde_json::from_str(NATIVE_REPORT).expect("Valid report");
    let result_set = ResultSet::<native::Metrics>::from(report);

    assert_eq!(result_set.metadata.timestamp, Some(Timestamp::Unix(1700000000)));
    assert_eq!(result_set.metadata.version.as_deref(), Some("1.0.0"));
    assert_eq!(result_set.metadata.input_size, Some(10000));
    assert_eq!(
        Timestamp::Unix(1700000000).to_string(),
        "1700000000 (2023-11-14 22:13:20 UTC)"
    );
}

#[test]
fn native_metadata_optional() {
    let report: native::Report =
        serde_json::from_str(r#"{ "benchmarks": [] }"#).expect("Valid report");
    let result_set = ResultSet::<native::Metrics>::from(report);

    assert!(result_set.is_empty());
    assert_eq!(result_set.metadata.timestamp, None);
    assert_eq!(result_set.metadata.input_size, None);
}

#[test]
fn native_missing_field_rejected() {
    let text = r#"{ "benchmarks": [ { "template_name": "upper", "results": [
        { "input_size": 10, "avg_time_per_path": 1, "throughput_paths_per_sec": 1.0, "latency_stats": {} }
    ] } ] }"#;
    let error = serde_json::from_str::<native::Report>(text).expect_err("Missing p95");
    assert!(error.to_string().contains("p95"));
}

#[test]
fn native_duplicate_template() {
    let text = r#"{ "benchmarks": [
        { "template_name": "upper", "results": [ { "input_size": 1, "avg_time_per_path": 1, "throughput_paths_per_sec": 1.0, "latency_stats": { "p95": 1 } } ] },
        { "template_name": "upper", "results": [ { "input_size": 1, "avg_time_per_path": 2, "throughput_paths_per_sec": 1.0, "latency_stats": { "p95": 1 } } ] }
    ] }"#;
    let report: native::Report = serde_json::from_str(text).expect("Valid report");
    let result_set = ResultSet::<native::Metrics>::from(report);

    assert_eq!(result_set.records["upper"].avg_time_per_path, 2.0);
    assert_eq!(
        result_set.diagnostics,
        vec![Diagnostic::DuplicateItem {
            name: "upper".to_owned()
        }]
    );
}

#[test]
fn warnings_name_their_report() {
    let report: native::Report = serde_json::from_str(NATIVE_REPORT).expect("Valid report");
    let result_set = ResultSet::<native::Metrics>::from(report);

    let warnings: Vec<String> = result_set
        .warnings(std::path::Path::new("runs/current.json"))
        .collect();
    assert_eq!(
        warnings,
        vec!["runs/current.json: Template `split` has no results and will be skipped.".to_owned()]
    );
}

#[test]
fn template_extraction() {
    assert_eq!(
        command::template("bench --template foo --size 1000 --output /dev/null"),
        Some("foo")
    );
    assert_eq!(command::template("bench --template={split:/:-1}"), Some("{split:/:-1}"));
    assert_eq!(command::template("--template last"), Some("last"));
    assert_eq!(command::template("bench --size 1000"), None);
    assert_eq!(command::template("bench --templates foo"), None);
}

#[test]
fn hyperfine_result_set() {
    let report: hyperfine::Report = serde_json::from_str(HYPERFINE_REPORT).expect("Valid report");
    let result_set = ResultSet::<hyperfine::Metrics>::from(report);

    let upper = result_set.records.get("{upper}").expect("Always exists");
    assert_eq!(upper.mean, 0.0123);
    assert_eq!(upper.stddev, Some(0.0004));

    let unknown = result_set.records.get("unknown#2").expect("Always exists");
    assert_eq!(unknown.stddev, None);
    assert_eq!(unknown.coefficient_of_variation(), None);
    assert!(!unknown.is_high_variance());

    assert_eq!(
        result_set.diagnostics,
        vec![Diagnostic::MissingTemplate {
            command: "bench --size 1000".to_owned(),
            name: "unknown#2".to_owned(),
        }]
    );
}

#[test]
fn hyperfine_missing_templates_do_not_collide() {
    let text = r#"{ "results": [
        { "command": "a", "mean": 1.0, "stddev": 0.1, "min": 0.9, "max": 1.1 },
        { "command": "b", "mean": 2.0, "stddev": 0.1, "min": 1.9, "max": 2.1 }
    ] }"#;
    let report: hyperfine::Report = serde_json::from_str(text).expect("Valid report");
    let result_set = ResultSet::<hyperfine::Metrics>::from(report);

    assert_eq!(result_set.len(), 2);
    assert_eq!(result_set.records["unknown#1"].mean, 1.0);
    assert_eq!(result_set.records["unknown#2"].mean, 2.0);
}

#[test]
fn hyperfine_stddev_required() {
    let text = r#"{ "results": [ { "command": "a", "mean": 1.0, "min": 0.9, "max": 1.1 } ] }"#;
    let error = serde_json::from_str::<hyperfine::Report>(text).expect_err("Missing stddev");
    assert!(error.to_string().contains("stddev"));
}

#[test]
fn hyperfine_high_variance() {
    let metrics = hyperfine::Metrics {
        mean: 1.0,
        min: 0.7,
        max: 1.4,
        stddev: Some(0.15),
    };
    assert!(metrics.is_high_variance());

    let metrics = hyperfine::Metrics {
        stddev: Some(0.1),
        ..metrics
    };
    assert!(!metrics.is_high_variance());
}

#[test]
fn read_not_found() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let path = directory.path().join("missing.json");
    let error = native::Report::try_from(path.as_path()).expect_err("File is missing");
    assert!(matches!(error, InputError::NotFound { .. }));
}

#[test]
fn read_empty_file() {
    let file = tempfile::NamedTempFile::new().expect("Temporary file");
    let error = hyperfine::Report::try_from(file.path()).expect_err("File is empty");
    assert!(matches!(error, InputError::EmptyFile { .. }));
}

#[test]
fn read_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().expect("Temporary file");
    write!(file, "{{ \"results\": [ ").expect("Writing");
    let error = hyperfine::Report::try_from(file.path()).expect_err("JSON is malformed");
    assert!(matches!(error, InputError::Parsing { .. }));
    assert!(error.to_string().starts_with("Invalid JSON"));
}

#[test]
fn read_valid_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temporary file");
    file.write_all(NATIVE_REPORT.as_bytes()).expect("Writing");
    let report = native::Report::try_from(file.path()).expect("Valid report");
    assert_eq!(report.benchmarks.len(), 2);
}
