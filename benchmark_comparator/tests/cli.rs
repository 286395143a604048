//!
//! Command line interface tests.
//!

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

const NATIVE_BASELINE: &str = r#"{ "version": "1.0.0", "timestamp": 1700000000, "benchmarks": [
    { "template_name": "upper", "results": [
        { "input_size": 100, "avg_time_per_path": 1100, "throughput_paths_per_sec": 900000.0, "latency_stats": { "p95": 2100 } },
        { "input_size": 10000, "avg_time_per_path": 1000, "throughput_paths_per_sec": 1000000.0, "latency_stats": { "p95": 2000 } }
    ] },
    { "template_name": "lower", "results": [
        { "input_size": 10000, "avg_time_per_path": 1000, "throughput_paths_per_sec": 1000000.0, "latency_stats": { "p95": 2000 } }
    ] },
    { "template_name": "empty", "results": [] }
] }"#;

const NATIVE_CURRENT: &str = r#"{ "version": "1.0.0", "timestamp": 1700086400, "benchmarks": [
    { "template_name": "upper", "results": [
        { "input_size": 10000, "avg_time_per_path": 1200, "throughput_paths_per_sec": 830000.0, "latency_stats": { "p95": 2300 } }
    ] },
    { "template_name": "lower", "results": [
        { "input_size": 10000, "avg_time_per_path": 900, "throughput_paths_per_sec": 1110000.0, "latency_stats": { "p95": 1800 } }
    ] }
] }"#;

const HYPERFINE_BASELINE: &str = r#"{ "results": [
    { "command": "bench --template {upper} --size 1000 --output /dev/null", "mean": 0.010, "stddev": 0.0002, "min": 0.009, "max": 0.011 },
    { "command": "bench --template {lower} --size 1000 --output /dev/null", "mean": 0.020, "stddev": 0.0002, "min": 0.019, "max": 0.021 }
] }"#;

const HYPERFINE_CURRENT: &str = r#"{ "results": [
    { "command": "bench --template {upper} --size 1000 --output /dev/null", "mean": 0.009, "stddev": 0.0002, "min": 0.008, "max": 0.010 },
    { "command": "bench --template {lower} --size 1000 --output /dev/null", "mean": 0.020, "stddev": 0.0002, "min": 0.019, "max": 0.021 }
] }"#;

fn write(directory: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = directory.path().join(name);
    std::fs::write(path.as_path(), content).expect("Writing a fixture");
    path
}

#[test]
fn compare_benchmarks_markdown() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let baseline = write(&directory, "baseline.json", NATIVE_BASELINE);
    let current = write(&directory, "current.json", NATIVE_CURRENT);

    Command::cargo_bin("compare-benchmarks")
        .expect("Binary exists")
        .arg(baseline)
        .arg(current)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# 📊 Benchmark Comparison Report"))
        .stdout(predicate::str::contains("**Input Size:** 10,000 paths"))
        .stdout(predicate::str::contains("| upper | 1.20μs | 🔴 +20.0% |"))
        .stdout(predicate::str::contains("- **Total templates compared:** 2"))
        .stdout(predicate::str::contains("- **lower**: 10.0% faster"))
        .stdout(predicate::str::contains("empty").not())
        .stderr(predicate::str::contains(
            "baseline.json: Template `empty` has no results and will be skipped.",
        ));
}

#[test]
fn compare_benchmarks_quiet() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let baseline = write(&directory, "baseline.json", NATIVE_BASELINE);
    let current = write(&directory, "current.json", NATIVE_CURRENT);

    Command::cargo_bin("compare-benchmarks")
        .expect("Binary exists")
        .arg("--quiet")
        .arg(baseline)
        .arg(current)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn compare_benchmarks_output_file() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let baseline = write(&directory, "baseline.json", NATIVE_BASELINE);
    let current = write(&directory, "current.json", NATIVE_CURRENT);
    let output = directory.path().join("report.json");

    Command::cargo_bin("compare-benchmarks")
        .expect("Binary exists")
        .arg(baseline)
        .arg(current)
        .arg("--output-format")
        .arg("json")
        .arg("--output-file")
        .arg(output.as_path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(output).expect("Report is written");
    let json: serde_json::Value = serde_json::from_str(content.as_str()).expect("Valid JSON");
    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["rows"][0]["name"], "lower");
}

#[test]
fn compare_benchmarks_missing_file() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let current = write(&directory, "current.json", NATIVE_CURRENT);

    Command::cargo_bin("compare-benchmarks")
        .expect("Binary exists")
        .arg(directory.path().join("missing.json"))
        .arg(current)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn compare_benchmarks_invalid_json() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let baseline = write(&directory, "baseline.json", "{ \"benchmarks\": [");
    let current = write(&directory, "current.json", NATIVE_CURRENT);

    Command::cargo_bin("compare-benchmarks")
        .expect("Binary exists")
        .arg(baseline)
        .arg(current)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn compare_benchmarks_missing_field() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let baseline = write(
        &directory,
        "baseline.json",
        r#"{ "benchmarks": [ { "template_name": "upper" } ] }"#,
    );
    let current = write(&directory, "current.json", NATIVE_CURRENT);

    Command::cargo_bin("compare-benchmarks")
        .expect("Binary exists")
        .arg(baseline)
        .arg(current)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing field `results`"));
}

#[test]
fn compare_hyperfine_markdown() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let baseline = write(&directory, "baseline.json", HYPERFINE_BASELINE);
    let current = write(&directory, "current.json", HYPERFINE_CURRENT);

    Command::cargo_bin("compare-hyperfine")
        .expect("Binary exists")
        .arg(baseline)
        .arg(current)
        .args(["--baseline-name", "v1.0.0", "--current-name", "main", "--size", "10000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Baseline:** `v1.0.0`"))
        .stdout(predicate::str::contains("**Input size:** 10,000 paths per run"))
        .stdout(predicate::str::contains("| `{upper}` | 10.00ms | 9.00ms | 🟢 -10.0% |"))
        .stdout(predicate::str::contains("- **Regressions:** 0 🔴"))
        .stdout(predicate::str::contains("### ⚠️ Performance Regressions").not());
}

#[test]
fn compare_hyperfine_no_common_templates() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let baseline = write(&directory, "baseline.json", HYPERFINE_BASELINE);
    let current = write(
        &directory,
        "current.json",
        r#"{ "results": [ { "command": "bench --template {trim}", "mean": 0.01, "stddev": null, "min": 0.01, "max": 0.01 } ] }"#,
    );

    Command::cargo_bin("compare-hyperfine")
        .expect("Binary exists")
        .arg(baseline)
        .arg(current)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No common templates found between baseline and current results.",
        ));
}

#[test]
fn compare_hyperfine_custom_thresholds() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let baseline = write(&directory, "baseline.json", HYPERFINE_BASELINE);
    let current = write(&directory, "current.json", HYPERFINE_CURRENT);

    Command::cargo_bin("compare-hyperfine")
        .expect("Binary exists")
        .arg(baseline)
        .arg(current)
        .args(["--significant-threshold", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Improvements:** 0 🟢"))
        .stdout(predicate::str::contains("Significant improvement (>15% faster)"));
}

#[test]
fn compare_hyperfine_rejects_non_finite_threshold() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let baseline = write(&directory, "baseline.json", HYPERFINE_BASELINE);
    let current = write(&directory, "current.json", HYPERFINE_CURRENT);

    Command::cargo_bin("compare-hyperfine")
        .expect("Binary exists")
        .arg(baseline)
        .arg(current)
        .args(["--neutral-threshold", "NaN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a finite non-negative percentage"));
}

#[test]
fn compare_benchmarks_rejects_overlapping_thresholds() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let baseline = write(&directory, "baseline.json", NATIVE_BASELINE);
    let current = write(&directory, "current.json", NATIVE_CURRENT);

    Command::cargo_bin("compare-benchmarks")
        .expect("Binary exists")
        .arg(baseline)
        .arg(current)
        .args(["--neutral-threshold", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The neutral threshold 8% exceeds the significant threshold 5%",
        ))
        .stdout(predicate::str::is_empty());
}
