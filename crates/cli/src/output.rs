//! Console reporting.
//!
//! Progress lines are printed through the progress bar so they do not
//! collide with its redraws.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use parsebench_benchmarks::{BenchmarkReport, BenchmarkResult, BenchmarkSummary};

/// Progress bar over `total` trials.
pub fn progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

/// Print one trial result and advance the bar.
pub fn report_trial(bar: &ProgressBar, result: &BenchmarkResult, target_ms_per_1k: f64) {
    bar.println(format_trial(result, target_ms_per_1k));
    bar.set_message(format!("{} {} lines", result.language, result.target_lines));
    bar.inc(1);
}

/// Render the console lines for one trial.
pub fn format_trial(result: &BenchmarkResult, target_ms_per_1k: f64) -> String {
    let header = format!(
        "Testing {} lines of {}",
        result.target_lines, result.language
    );

    if !result.success {
        return format!(
            "{}\n  {} {} failed: {}",
            header.bold(),
            "✗".red(),
            result.language,
            result.error.as_deref().unwrap_or("unknown error")
        );
    }

    let mut lines = vec![header.bold().to_string()];
    lines.push(format!(
        "  {} Parsed {} lines in {:.1}ms",
        "✓".green(),
        result.actual_lines,
        result.duration_ms.unwrap_or_default()
    ));
    if let Some(rate) = result.lines_per_second {
        lines.push(format!("  {rate:.0} lines/second"));
    }
    if let Some(cost) = result.ms_per_1k_lines {
        lines.push(format!("  {cost:.1}ms per 1K lines"));
    }
    lines.push(format!(
        "  Found: {} functions, {} classes, {} findings",
        result.functions_found.unwrap_or_default(),
        result.classes_found.unwrap_or_default(),
        result.findings_count.unwrap_or_default()
    ));
    match result.meets_target(target_ms_per_1k) {
        Some(true) => lines.push(format!(
            "  {}",
            format!("MEETS TARGET (≤{target_ms_per_1k}ms per 1K lines)").green()
        )),
        Some(false) => lines.push(format!(
            "  {}",
            format!("EXCEEDS TARGET (>{target_ms_per_1k}ms per 1K lines)").red()
        )),
        None => {}
    }

    lines.join("\n")
}

/// Render the end-of-run summary.
pub fn format_summary(summary: &BenchmarkSummary) -> String {
    let mut lines = vec![
        String::new(),
        "BENCHMARK SUMMARY".bold().to_string(),
        "=".repeat(30),
        format!(
            "Trials completed: {}/{} ({} sizes requested)",
            summary.successful_trials, summary.total_trials, summary.requested_sizes
        ),
    ];

    match &summary.stats {
        Some(stats) => {
            lines.push(format!(
                "Average performance: {:.1}ms per 1K lines",
                stats.average_ms_per_1k_lines
            ));
            lines.push(format!(
                "Average throughput: {:.0} lines/second",
                stats.average_lines_per_second
            ));
            lines.push(format!("Largest file tested: {} lines", stats.max_lines_tested));
            if stats.meets_target {
                lines.push(
                    format!(
                        "PERFORMANCE TARGET MET (≤{}ms per 1K lines)",
                        summary.target_ms_per_1k
                    )
                    .green()
                    .bold()
                    .to_string(),
                );
            } else {
                lines.push(
                    format!(
                        "Performance target not met (>{}ms per 1K lines)",
                        summary.target_ms_per_1k
                    )
                    .red()
                    .to_string(),
                );
            }
        }
        None => lines.push("No successful trials; no statistics available.".yellow().to_string()),
    }

    lines.join("\n")
}

/// Render the readiness verdict.
pub fn format_readiness(summary: &BenchmarkSummary) -> String {
    if summary.ready {
        format!(
            "Readiness: {}\n  Last three successful trials each analyzed 1K+ lines",
            "READY".green().bold()
        )
    } else {
        format!(
            "Readiness: {}\n  Need more successful trials with larger files",
            "IN PROGRESS".yellow().bold()
        )
    }
}

/// Print summary and readiness for a finished report.
pub fn print_report(report: &BenchmarkReport) {
    println!("{}", format_summary(&report.summary));
    println!();
    println!("{}", format_readiness(&report.summary));
}
