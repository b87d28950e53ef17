//! Benchmark result types.
//!
//! This module provides the per-trial [`BenchmarkResult`] record. A record is
//! built once, from either a service response or a failure, and never changes
//! afterwards.

use chrono::{DateTime, Utc};
use parsebench_core::{Dialect, FileAnalysisResult};
use serde::{Deserialize, Serialize};

/// Why a trial failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The service could not be reached.
    Unreachable,
    /// The call did not complete within the timeout.
    Timeout,
    /// The service answered with a non-success status.
    BadStatus,
    /// The response body did not have the expected shape.
    MalformedBody,
}

/// Outcome of one (size, dialect) trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Dialect label, e.g. `JavaScript`.
    pub language: Dialect,
    /// Requested line count.
    pub target_lines: i64,
    /// Line count of the generated file.
    pub actual_lines: usize,
    /// Wall-clock duration of the service call, when a response arrived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
    /// Lines analyzed per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_per_second: Option<f64>,
    /// Milliseconds spent per 1000 lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ms_per_1k_lines: Option<f64>,
    /// Functions reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions_found: Option<u64>,
    /// Classes reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes_found: Option<u64>,
    /// Complexity score reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity_score: Option<f64>,
    /// Number of findings reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub findings_count: Option<usize>,
    /// Whether the call succeeded.
    pub success: bool,
    /// Failure category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
    /// Failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the record was created.
    pub timestamp: DateTime<Utc>,
}

impl BenchmarkResult {
    /// Create a successful result from the first file result of a response.
    pub fn success(
        language: Dialect,
        target_lines: i64,
        actual_lines: usize,
        duration_ms: f64,
        file: &FileAnalysisResult,
    ) -> Self {
        Self {
            language,
            target_lines,
            actual_lines,
            duration_ms: Some(duration_ms),
            lines_per_second: lines_per_second(actual_lines, duration_ms),
            ms_per_1k_lines: ms_per_1k_lines(actual_lines, duration_ms),
            functions_found: Some(file.metrics.functions_count),
            classes_found: Some(file.metrics.classes_count),
            complexity_score: Some(file.metrics.complexity_score),
            findings_count: Some(file.findings.len()),
            success: true,
            failure: None,
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a failed result.
    ///
    /// `duration_ms` is the time until the error response arrived, if one did.
    pub fn failure(
        language: Dialect,
        target_lines: i64,
        actual_lines: usize,
        duration_ms: Option<f64>,
        kind: FailureKind,
        error: impl Into<String>,
    ) -> Self {
        let mut error = error.into();
        if error.trim().is_empty() {
            error = format!("{kind:?}");
        }

        Self {
            language,
            target_lines,
            actual_lines,
            duration_ms,
            lines_per_second: None,
            ms_per_1k_lines: None,
            functions_found: None,
            classes_found: None,
            complexity_score: None,
            findings_count: None,
            success: false,
            failure: Some(kind),
            error: Some(error),
            timestamp: Utc::now(),
        }
    }

    /// Whether this trial's normalized cost is within `target_ms_per_1k`.
    ///
    /// `None` when the cost is undefined.
    pub fn meets_target(&self, target_ms_per_1k: f64) -> Option<bool> {
        self.ms_per_1k_lines.map(|ms| ms <= target_ms_per_1k)
    }
}

/// `actual_lines / (duration_ms / 1000)`, undefined for empty input or a
/// zero duration.
pub fn lines_per_second(actual_lines: usize, duration_ms: f64) -> Option<f64> {
    if actual_lines == 0 || duration_ms <= 0.0 {
        return None;
    }
    Some(actual_lines as f64 / (duration_ms / 1000.0))
}

/// `(duration_ms / actual_lines) * 1000`, undefined for empty input.
pub fn ms_per_1k_lines(actual_lines: usize, duration_ms: f64) -> Option<f64> {
    if actual_lines == 0 {
        return None;
    }
    Some((duration_ms / actual_lines as f64) * 1000.0)
}
