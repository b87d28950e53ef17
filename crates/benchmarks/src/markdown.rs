//! Markdown output generation for benchmark reports.
//!
//! This module renders a [`BenchmarkReport`] as a markdown document with one
//! table row per trial followed by the summary.

use crate::report::BenchmarkReport;
use crate::result::BenchmarkResult;
use std::fmt::Write;

/// Generate a markdown summary from a benchmark report.
pub fn generate_summary(report: &BenchmarkReport) -> String {
    let mut output = String::new();
    let summary = &report.summary;

    writeln!(output, "# Benchmark Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Run: `{}`", report.run_id).unwrap();
    writeln!(output, "Generated: {}", report.generated_at.to_rfc3339()).unwrap();
    writeln!(output, "Service: {}", report.base_url).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "## Results").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "| Language | Target | Actual | Duration (ms) | Lines/s | ms/1K lines | Functions | Classes | Findings | Status |"
    )
    .unwrap();
    writeln!(
        output,
        "|----------|--------|--------|---------------|---------|-------------|-----------|---------|----------|--------|"
    )
    .unwrap();

    for result in &report.benchmarks {
        writeln!(output, "{}", result_row(result, summary.target_ms_per_1k)).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "## Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Trials completed: {}/{} ({} sizes requested)",
        summary.successful_trials, summary.total_trials, summary.requested_sizes
    )
    .unwrap();

    match &summary.stats {
        Some(stats) => {
            writeln!(
                output,
                "Average performance: {:.1}ms per 1K lines",
                stats.average_ms_per_1k_lines
            )
            .unwrap();
            writeln!(
                output,
                "Average throughput: {:.0} lines/second",
                stats.average_lines_per_second
            )
            .unwrap();
            writeln!(output, "Largest file tested: {} lines", stats.max_lines_tested).unwrap();
            writeln!(
                output,
                "Cost spread: min {:.1} / p50 {:.1} / p90 {:.1} / max {:.1} ms per 1K lines",
                stats.ms_per_1k_distribution.min,
                stats.ms_per_1k_distribution.p50,
                stats.ms_per_1k_distribution.p90,
                stats.ms_per_1k_distribution.max
            )
            .unwrap();
            writeln!(output).unwrap();
            if stats.meets_target {
                writeln!(
                    output,
                    "**Target met** (≤{}ms per 1K lines)",
                    summary.target_ms_per_1k
                )
                .unwrap();
            } else {
                writeln!(
                    output,
                    "**Target not met** (>{}ms per 1K lines)",
                    summary.target_ms_per_1k
                )
                .unwrap();
            }
        }
        None => {
            writeln!(output, "No successful trials; no statistics available.").unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(
        output,
        "Readiness: {}",
        if summary.ready { "ready" } else { "in progress" }
    )
    .unwrap();

    output
}

fn result_row(result: &BenchmarkResult, target_ms_per_1k: f64) -> String {
    let status = if !result.success {
        format!("failed: {}", escape_cell(result.error.as_deref().unwrap_or("")))
    } else {
        match result.meets_target(target_ms_per_1k) {
            Some(true) => "meets target".to_string(),
            Some(false) => "exceeds target".to_string(),
            None => "ok".to_string(),
        }
    };

    format!(
        "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |",
        result.language,
        result.target_lines,
        result.actual_lines,
        fmt_opt(result.duration_ms, 1),
        fmt_opt(result.lines_per_second, 0),
        fmt_opt(result.ms_per_1k_lines, 1),
        result.functions_found.map_or("-".to_string(), |v| v.to_string()),
        result.classes_found.map_or("-".to_string(), |v| v.to_string()),
        result.findings_count.map_or("-".to_string(), |v| v.to_string()),
        status
    )
}

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    value.map_or("-".to_string(), |v| format!("{v:.precision$}"))
}

fn escape_cell(text: &str) -> String {
    let single_line = text.replace(['\n', '\r'], " ").replace('|', "\\|");
    if single_line.chars().count() > 80 {
        let short: String = single_line.chars().take(77).collect();
        format!("{short}...")
    } else {
        single_line
    }
}
