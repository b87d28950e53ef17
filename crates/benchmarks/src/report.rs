//! The persisted report of a benchmark run.

use crate::result::BenchmarkResult;
use crate::summary::{summarize, BenchmarkSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything a run produced: per-trial results and their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Unique identifier of the run.
    pub run_id: Uuid,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// Analysis service that was benchmarked.
    pub base_url: String,
    /// Per-trial results, in sweep order.
    pub benchmarks: Vec<BenchmarkResult>,
    /// Aggregate over `benchmarks`.
    pub summary: BenchmarkSummary,
}

impl BenchmarkReport {
    /// Assemble a report, computing the summary from `benchmarks`.
    pub fn new(
        base_url: impl Into<String>,
        benchmarks: Vec<BenchmarkResult>,
        requested_sizes: usize,
        target_ms_per_1k: f64,
    ) -> Self {
        let summary = summarize(&benchmarks, requested_sizes, target_ms_per_1k);
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            base_url: base_url.into(),
            benchmarks,
            summary,
        }
    }
}
