//! Aggregation of trial results.
//!
//! [`summarize`] reduces the result list of a sweep to one
//! [`BenchmarkSummary`]. Only successful trials contribute. When none
//! succeeded the statistics block is absent rather than computed from an
//! empty set.

use crate::result::BenchmarkResult;
use serde::{Deserialize, Serialize};

/// Default pass threshold in milliseconds per 1000 lines.
pub const DEFAULT_TARGET_MS_PER_1K: f64 = 100.0;

/// Number of trailing successful trials checked by [`is_ready`].
pub const READINESS_WINDOW: usize = 3;

/// Minimum size of each trial in the readiness window.
pub const READINESS_MIN_LINES: usize = 1000;

/// Distribution of normalized cost over successful trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostDistribution {
    /// Cheapest trial
    pub min: f64,
    /// Most expensive trial
    pub max: f64,
    /// 50th percentile (median)
    pub p50: f64,
    /// 90th percentile
    pub p90: f64,
    /// 95th percentile
    pub p95: f64,
    /// Number of samples
    pub sample_count: usize,
}

impl CostDistribution {
    /// Build a distribution from samples; `None` when there are none.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();

        Some(Self {
            min: sorted[0],
            max: sorted[n - 1],
            p50: sorted[n * 50 / 100],
            p90: sorted[n * 90 / 100],
            p95: sorted[(n * 95 / 100).min(n - 1)],
            sample_count: n,
        })
    }
}

/// Statistics over the successful trials of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Mean milliseconds per 1000 lines.
    pub average_ms_per_1k_lines: f64,
    /// Mean lines per second.
    pub average_lines_per_second: f64,
    /// Largest generated file that was analyzed successfully.
    pub max_lines_tested: usize,
    /// Whether the mean cost is within the target.
    pub meets_target: bool,
    /// Spread of the per-trial cost.
    pub ms_per_1k_distribution: CostDistribution,
}

/// Summary of a full sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    /// Number of sizes requested for the sweep.
    pub requested_sizes: usize,
    /// Number of trials run.
    pub total_trials: usize,
    /// Number of trials that succeeded.
    pub successful_trials: usize,
    /// Threshold the mean cost was judged against.
    pub target_ms_per_1k: f64,
    /// Statistics, absent when no trial succeeded.
    pub stats: Option<SummaryStats>,
    /// Whether the last three successful trials were all large files.
    pub ready: bool,
}

impl BenchmarkSummary {
    /// Whether the sweep met its target. False when nothing succeeded.
    pub fn meets_target(&self) -> bool {
        self.stats.as_ref().is_some_and(|s| s.meets_target)
    }
}

/// Reduce `results` to a summary judged against `target_ms_per_1k`.
pub fn summarize(
    results: &[BenchmarkResult],
    requested_sizes: usize,
    target_ms_per_1k: f64,
) -> BenchmarkSummary {
    let successful: Vec<&BenchmarkResult> = results.iter().filter(|r| r.success).collect();

    BenchmarkSummary {
        requested_sizes,
        total_trials: results.len(),
        successful_trials: successful.len(),
        target_ms_per_1k,
        stats: compute_stats(&successful, target_ms_per_1k),
        ready: is_ready(results),
    }
}

fn compute_stats(successful: &[&BenchmarkResult], target_ms_per_1k: f64) -> Option<SummaryStats> {
    // Empty files and zero-duration calls leave a derived metric undefined;
    // such trials are left out of both means.
    let measured: Vec<(f64, f64)> = successful
        .iter()
        .filter_map(|r| Some((r.ms_per_1k_lines?, r.lines_per_second?)))
        .collect();
    let costs: Vec<f64> = measured.iter().map(|(cost, _)| *cost).collect();
    let rates: Vec<f64> = measured.iter().map(|(_, rate)| *rate).collect();

    let average_ms_per_1k_lines = mean(&costs)?;
    let average_lines_per_second = mean(&rates)?;
    let max_lines_tested = successful.iter().map(|r| r.actual_lines).max()?;
    let ms_per_1k_distribution = CostDistribution::from_samples(&costs)?;

    Some(SummaryStats {
        average_ms_per_1k_lines,
        average_lines_per_second,
        max_lines_tested,
        meets_target: average_ms_per_1k_lines <= target_ms_per_1k,
        ms_per_1k_distribution,
    })
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Readiness check over the trailing successful trials, in sweep order.
///
/// True when at least three trials succeeded and each of the last three
/// analyzed at least 1000 lines. Does not affect the pass/fail verdict.
pub fn is_ready(results: &[BenchmarkResult]) -> bool {
    let successful: Vec<&BenchmarkResult> = results.iter().filter(|r| r.success).collect();
    if successful.len() < READINESS_WINDOW {
        return false;
    }

    successful[successful.len() - READINESS_WINDOW..]
        .iter()
        .all(|r| r.actual_lines >= READINESS_MIN_LINES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::FailureKind;
    use parsebench_core::{Dialect, FileAnalysisResult, FileMetrics};

    fn file_result() -> FileAnalysisResult {
        FileAnalysisResult {
            metrics: FileMetrics {
                functions_count: 2,
                classes_count: 1,
                complexity_score: 5.0,
            },
            findings: Vec::new(),
        }
    }

    fn ok(lines: usize, duration_ms: f64) -> BenchmarkResult {
        BenchmarkResult::success(
            Dialect::JavaScript,
            lines as i64,
            lines,
            duration_ms,
            &file_result(),
        )
    }

    fn failed(lines: usize) -> BenchmarkResult {
        BenchmarkResult::failure(
            Dialect::TypeScript,
            lines as i64,
            lines,
            None,
            FailureKind::Timeout,
            "operation timed out",
        )
    }

    #[test]
    fn test_empty_successful_set_has_no_stats() {
        let results = vec![failed(100), failed(500)];
        let summary = summarize(&results, 1, DEFAULT_TARGET_MS_PER_1K);

        assert_eq!(summary.total_trials, 2);
        assert_eq!(summary.successful_trials, 0);
        assert!(summary.stats.is_none());
        assert!(!summary.meets_target());
        assert!(!summary.ready);

        let summary = summarize(&[], 0, DEFAULT_TARGET_MS_PER_1K);
        assert!(summary.stats.is_none());
    }

    #[test]
    fn test_means_over_successful_trials() {
        let results = vec![ok(1000, 50.0), failed(1000), ok(1000, 100.0), ok(1000, 150.0)];
        let summary = summarize(&results, 2, DEFAULT_TARGET_MS_PER_1K);
        let stats = summary.stats.as_ref().unwrap();

        assert_eq!(summary.requested_sizes, 2);
        assert_eq!(summary.total_trials, 4);
        assert_eq!(summary.successful_trials, 3);
        assert_eq!(stats.average_ms_per_1k_lines, 100.0);
        let expected_rate = (20_000.0 + 10_000.0 + 1000.0 / 0.15) / 3.0;
        assert!((stats.average_lines_per_second - expected_rate).abs() < 1e-9);
        assert_eq!(stats.max_lines_tested, 1000);
        assert!(stats.meets_target);
        assert!(summary.meets_target());
    }

    #[test]
    fn test_unmeasurable_trials_are_left_out_of_both_means() {
        let instant = vec![ok(1000, 0.0), ok(2000, 0.0)];
        let summary = summarize(&instant, 2, DEFAULT_TARGET_MS_PER_1K);
        assert_eq!(summary.successful_trials, 2);
        assert!(summary.stats.is_none());
        assert!(!summary.meets_target());

        let mixed = vec![ok(1000, 0.0), ok(1000, 50.0), ok(0, 10.0)];
        let stats = summarize(&mixed, 2, DEFAULT_TARGET_MS_PER_1K).stats.unwrap();
        assert_eq!(stats.average_ms_per_1k_lines, 50.0);
        assert!((stats.average_lines_per_second - 20_000.0).abs() < 1e-9);
        assert_eq!(stats.ms_per_1k_distribution.sample_count, 1);
        assert_eq!(stats.max_lines_tested, 1000);
    }

    #[test]
    fn test_target_missed_when_mean_exceeds_threshold() {
        let results = vec![ok(1000, 90.0), ok(1000, 120.0)];
        let summary = summarize(&results, 1, DEFAULT_TARGET_MS_PER_1K);
        assert!(!summary.meets_target());

        let lenient = summarize(&results, 1, 200.0);
        assert!(lenient.meets_target());
    }

    #[test]
    fn test_max_lines_tested() {
        let results = vec![ok(120, 5.0), ok(5030, 80.0), failed(9000)];
        let stats = summarize(&results, 2, DEFAULT_TARGET_MS_PER_1K).stats.unwrap();
        assert_eq!(stats.max_lines_tested, 5030);
    }

    #[test]
    fn test_cost_distribution() {
        let dist = CostDistribution::from_samples(&[30.0, 10.0, 20.0, 40.0]).unwrap();
        assert_eq!(dist.min, 10.0);
        assert_eq!(dist.max, 40.0);
        assert_eq!(dist.p50, 30.0);
        assert_eq!(dist.p95, 40.0);
        assert_eq!(dist.sample_count, 4);
        assert!(CostDistribution::from_samples(&[]).is_none());
    }

    #[test]
    fn test_readiness_over_last_three_successes() {
        let ready = vec![ok(1000, 10.0), ok(1200, 10.0), ok(5000, 10.0)];
        assert!(is_ready(&ready));

        let not_ready = vec![ok(999, 10.0), ok(1200, 10.0), ok(5000, 10.0)];
        assert!(!is_ready(&not_ready));

        let too_few = vec![ok(5000, 10.0), ok(5000, 10.0)];
        assert!(!is_ready(&too_few));
    }

    #[test]
    fn test_readiness_skips_failures() {
        let results = vec![
            ok(100, 10.0),
            ok(1000, 10.0),
            failed(50),
            ok(2000, 10.0),
            failed(10),
            ok(5000, 10.0),
        ];
        assert!(is_ready(&results));
        assert!(summarize(&results, 4, DEFAULT_TARGET_MS_PER_1K).ready);
    }
}
