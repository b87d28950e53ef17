//! I/O operations for benchmark reports.
//!
//! This module provides functionality to read and write benchmark
//! reports to the filesystem. Reports are written once, at the end of a run.

use crate::markdown;
use crate::report::BenchmarkReport;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default output directory path.
pub const OUTPUT_DIR: &str = "benchmarks/output";

/// File name of the JSON report.
pub const RESULTS_FILE: &str = "benchmark_results.json";

/// File name of the markdown summary.
pub const SUMMARY_FILE: &str = "summary.md";

/// Ensure the output directory exists.
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Write a report as pretty-printed JSON.
pub fn write_report_json(report: &BenchmarkReport, path: impl AsRef<Path>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, json)
}

/// Write the markdown summary of a report.
pub fn write_summary(report: &BenchmarkReport, path: impl AsRef<Path>) -> io::Result<()> {
    fs::write(path, markdown::generate_summary(report))
}

/// Write the JSON report and the markdown summary into `dir`.
///
/// Returns the paths written.
pub fn write_all_outputs(
    report: &BenchmarkReport,
    dir: impl AsRef<Path>,
) -> io::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    ensure_output_dir(dir)?;

    let json_path = dir.join(RESULTS_FILE);
    write_report_json(report, &json_path)?;

    let summary_path = dir.join(SUMMARY_FILE);
    write_summary(report, &summary_path)?;

    Ok(vec![json_path, summary_path])
}

/// Read a report from a JSON file.
pub fn read_report_json(path: impl AsRef<Path>) -> io::Result<BenchmarkReport> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
