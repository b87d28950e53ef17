//! Benchmark core for ParseBench.
//!
//! This crate holds the pure half of the harness: synthetic source
//! generation, per-trial result records, aggregation against the throughput
//! target, and report persistence. Driving the analysis service lives in
//! `parsebench-adapters`.
//!
//! # Quick Start
//!
//! ```
//! use parsebench_benchmarks::generator;
//! use parsebench_core::Dialect;
//!
//! let source = generator::generate(1000, Dialect::TypeScript);
//! assert!(source.actual_lines >= 1000);
//! ```
//!
//! # Modules
//!
//! - [`generator`] - Deterministic JavaScript and TypeScript generation
//! - [`result`] - The per-trial `BenchmarkResult` record
//! - [`summary`] - Aggregation and the pass/fail verdict
//! - [`report`] - The persisted report document
//! - [`io`] - I/O operations for reading/writing reports
//! - [`markdown`] - Markdown report generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod generator;
pub mod io;
pub mod markdown;
pub mod report;
pub mod result;
pub mod summary;

pub use generator::GeneratedSource;
pub use report::BenchmarkReport;
pub use result::{BenchmarkResult, FailureKind};
pub use summary::{summarize, BenchmarkSummary};

#[cfg(test)]
mod tests {
    use super::*;
    use parsebench_core::{Dialect, FileAnalysisResult, FileMetrics};

    #[test]
    fn test_report_summarizes_its_results() {
        let file = FileAnalysisResult {
            metrics: FileMetrics {
                functions_count: 1,
                classes_count: 0,
                complexity_score: 1.0,
            },
            findings: Vec::new(),
        };
        let results: Vec<BenchmarkResult> = [(1000usize, 50.0), (1000, 100.0), (1000, 150.0)]
            .into_iter()
            .map(|(lines, ms)| {
                BenchmarkResult::success(Dialect::JavaScript, lines as i64, lines, ms, &file)
            })
            .collect();

        let report = BenchmarkReport::new("http://localhost:8080", results, 3, 100.0);

        assert_eq!(report.summary.successful_trials, 3);
        assert!(report.summary.meets_target());
        assert!(report.summary.ready);
    }
}
