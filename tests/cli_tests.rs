//! CLI Integration Tests
//!
//! Runs the `compression-report` binary against results trees built in
//! temporary directories: argument parsing, output routing, config merging
//! and exit codes.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;
use assert_cmd::prelude::*;
use predicates::prelude::*;

/// Test CLI binary name
const CLI_BIN: &str = "compression-report";

const TEN_GIB: u64 = 10 * 1024 * 1024 * 1024;

/// Helper to create a results tree with one run per scenario
fn create_results(dir: &TempDir, scenarios: &[&str]) -> PathBuf {
    let results = dir.path().join("results");
    for (i, scenario) in scenarios.iter().enumerate() {
        let run_dir = results.join(format!("{:02}_{}", i, scenario));
        fs::create_dir_all(&run_dir).unwrap();
        let metrics = serde_json::json!({
            "scenario": scenario,
            "nodes": 10,
            "runtime_seconds": 3600,
            "output_size_bytes": TEN_GIB,
        });
        fs::write(run_dir.join("metrics.json"), metrics.to_string()).unwrap();
    }
    results
}

/// Helper to create a test config file
fn create_test_config(dir: &TempDir, contents: &str) -> PathBuf {
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, contents).unwrap();
    config_path
}

/// Command with an isolated, empty configuration file
fn report_cmd(dir: &TempDir) -> Command {
    let config = create_test_config(dir, "");
    let mut cmd = Command::cargo_bin(CLI_BIN).unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin(CLI_BIN).unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--results-dir"))
        .stdout(predicate::str::contains("--retention-days"))
        .stdout(predicate::str::contains("--instance-type"))
        .stdout(predicate::str::contains("--charts"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin(CLI_BIN).unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_results_dir_required() {
    let mut cmd = Command::cargo_bin(CLI_BIN).unwrap();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--results-dir"));
}

#[test]
fn test_text_report_to_stdout() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline", "lustre_lz4", "netcdf_4"]);

    report_cmd(&dir)
        .arg("--results-dir")
        .arg(&results)
        .assert()
        .success()
        .stdout(predicate::str::contains("WRF Compression Benchmark Results"))
        .stdout(predicate::str::contains("Optimal for cost: lustre_lz4 ($91.38)"))
        .stderr(predicate::str::contains("Found 3 benchmark results"));
}

#[test]
fn test_quiet_suppresses_status_lines() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline"]);

    report_cmd(&dir)
        .arg("--results-dir")
        .arg(&results)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scenarios tested: 1"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_json_written_next_to_results() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline", "netcdf_4"]);

    report_cmd(&dir)
        .arg("--results-dir")
        .arg(&results)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stderr(predicate::str::contains("analysis.json"));

    let json = fs::read_to_string(results.join("analysis.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 2);
    assert_eq!(records[0]["scenario"], "baseline");
    assert_eq!(records[1]["total_cost"], 131.92);
}

#[test]
fn test_html_explicit_output() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline", "netcdf_1"]);
    let output = dir.path().join("out.html");

    report_cmd(&dir)
        .arg("--results-dir")
        .arg(&results)
        .arg("--format")
        .arg("html")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(!results.join("report.html").exists());
}

#[test]
fn test_charts_flag() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline", "lustre_lz4"]);

    report_cmd(&dir)
        .arg("--results-dir")
        .arg(&results)
        .arg("--charts")
        .assert()
        .success();

    assert!(results.join("cost_comparison.html").exists());
    assert!(results.join("compression_ratio.html").exists());
}

#[test]
fn test_retention_days_flag() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline"]);

    report_cmd(&dir)
        .arg("--results-dir")
        .arg(&results)
        .arg("--retention-days")
        .arg("365")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost Comparison (365-day storage retention)"));
}

#[test]
fn test_config_file_sets_defaults() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline"]);
    let config = create_test_config(
        &dir,
        r#"
[analysis]
retention_days = 90

[output]
format = "html"
"#,
    );

    Command::cargo_bin(CLI_BIN)
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--results-dir")
        .arg(&results)
        .assert()
        .success();

    let html = fs::read_to_string(results.join("report.html")).unwrap();
    assert!(html.contains("Cost Comparison (90-day retention)"));
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline"]);
    let config = create_test_config(&dir, "[output]\nformat = \"html\"\n");

    Command::cargo_bin(CLI_BIN)
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--results-dir")
        .arg(&results)
        .arg("--format")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("WRF Compression Benchmark Results"));

    assert!(!results.join("report.html").exists());
}

#[test]
fn test_missing_results_dir() {
    let dir = TempDir::new().unwrap();

    report_cmd(&dir)
        .arg("--results-dir")
        .arg(dir.path().join("nowhere"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Results directory not found"));
}

#[test]
fn test_missing_results_dir_with_file_formats() {
    for format in ["html", "json"] {
        let dir = TempDir::new().unwrap();

        report_cmd(&dir)
            .arg("--results-dir")
            .arg(dir.path().join("nowhere"))
            .arg("--format")
            .arg(format)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Results directory not found"));
    }
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline"]);

    Command::cargo_bin(CLI_BIN)
        .unwrap()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--results-dir")
        .arg(&results)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_no_results_found() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("results");
    fs::create_dir_all(results.join("empty_run")).unwrap();

    report_cmd(&dir)
        .arg("--results-dir")
        .arg(&results)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No benchmark results found"));
}

#[test]
fn test_invalid_retention_days() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline"]);

    report_cmd(&dir)
        .arg("--results-dir")
        .arg(&results)
        .arg("--retention-days")
        .arg("0")
        .assert()
        .failure()
        .code(12)
        .stderr(predicate::str::contains("retention-days"));
}

#[test]
fn test_unknown_instance_type() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline"]);

    report_cmd(&dir)
        .arg("--results-dir")
        .arg(&results)
        .arg("--instance-type")
        .arg("t3.micro")
        .assert()
        .failure()
        .code(12)
        .stderr(predicate::str::contains("hpc7a.96xlarge"));
}

#[test]
fn test_unwritable_output_location() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline"]);

    report_cmd(&dir)
        .arg("--results-dir")
        .arg(&results)
        .arg("--output")
        .arg(dir.path().join("missing").join("report.txt"))
        .assert()
        .failure()
        .code(10);
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let results = create_results(&dir, &["baseline"]);
    let config = create_test_config(&dir, "[analysis]\ninstance_type = \"m5.large\"\n");

    Command::cargo_bin(CLI_BIN)
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--results-dir")
        .arg(&results)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}
