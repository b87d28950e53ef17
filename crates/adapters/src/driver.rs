// Copyright 2025 LLM Observatory Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark driver.
//!
//! Runs one trial per (size, dialect) pair against an [`AnalysisTarget`],
//! strictly one call at a time, sizes in the outer loop. A failed trial is
//! recorded and the sweep moves on; only the initial liveness probe can abort
//! a run.
//!
//! # Example
//!
//! ```no_run
//! use parsebench_adapters::{BenchmarkDriver, HttpAnalysisClient};
//! use parsebench_core::BenchConfig;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BenchConfig::default();
//! let client = HttpAnalysisClient::from_config(&config)?;
//! let driver = BenchmarkDriver::new(client, config);
//!
//! let report = driver.run(|result| println!("{:?}", result.ms_per_1k_lines)).await?;
//! println!("target met: {}", report.summary.meets_target());
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, ServiceError};
use crate::target::AnalysisTarget;
use parsebench_benchmarks::{generator, BenchmarkReport, BenchmarkResult, FailureKind};
use parsebench_core::{AnalysisRequest, BenchConfig, Dialect};
use std::time::Instant;
use tracing::{info, warn};

/// Drives benchmark sweeps against an analysis target.
pub struct BenchmarkDriver<T> {
    target: T,
    config: BenchConfig,
}

impl<T: AnalysisTarget> BenchmarkDriver<T> {
    /// Create a driver for `target` using `config`.
    pub fn new(target: T, config: BenchConfig) -> Self {
        Self { target, config }
    }

    /// The run configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// The benchmarked service.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Probe the service; an error means no trial should run.
    pub async fn check_health(&self) -> Result<()> {
        self.target.check_health().await
    }

    /// Run a single trial.
    pub async fn run_trial(&self, size: i64, dialect: Dialect) -> BenchmarkResult {
        let source = generator::generate(size, dialect);
        let actual_lines = source.actual_lines;
        let request =
            AnalysisRequest::single(dialect.file_name(size), source.text, self.config.rules);

        let started = Instant::now();
        let outcome = self.target.analyze(&request).await;
        let duration_ms = started.elapsed().as_secs_f64() * 1000.0;

        let result = match outcome {
            Ok(response) => match response.first() {
                Some(file) => {
                    BenchmarkResult::success(dialect, size, actual_lines, duration_ms, file)
                }
                None => BenchmarkResult::failure(
                    dialect,
                    size,
                    actual_lines,
                    Some(duration_ms),
                    FailureKind::MalformedBody,
                    "response contains no file results",
                ),
            },
            Err(err) => failure_result(dialect, size, actual_lines, duration_ms, &err),
        };

        if result.success {
            info!(
                language = %dialect,
                target_lines = size,
                actual_lines,
                duration_ms,
                ms_per_1k_lines = result.ms_per_1k_lines,
                meets_target = result.meets_target(self.config.target_ms_per_1k),
                "Trial completed"
            );
        } else {
            warn!(
                language = %dialect,
                target_lines = size,
                actual_lines,
                error = result.error.as_deref().unwrap_or_default(),
                "Trial failed"
            );
        }

        result
    }

    /// Run every (size, dialect) trial in order, reporting each result to
    /// `observer` as soon as it is available.
    pub async fn run_sweep<F>(&self, sizes: &[i64], mut observer: F) -> Vec<BenchmarkResult>
    where
        F: FnMut(&BenchmarkResult),
    {
        let mut results = Vec::with_capacity(sizes.len() * Dialect::ALL.len());

        for &size in sizes {
            for dialect in Dialect::ALL {
                let result = self.run_trial(size, dialect).await;
                observer(&result);
                results.push(result);
            }
        }

        results
    }

    /// Probe the service, sweep the configured sizes and assemble the report.
    pub async fn run<F>(&self, observer: F) -> Result<BenchmarkReport>
    where
        F: FnMut(&BenchmarkResult),
    {
        if let Err(err) = self.check_health().await {
            warn!(
                base_url = %self.config.base_url(),
                error = %err,
                "Analysis service health check failed"
            );
            return Err(err);
        }
        info!(
            base_url = %self.config.base_url(),
            sizes = ?self.config.sizes,
            "Starting benchmark sweep"
        );

        let results = self.run_sweep(&self.config.sizes, observer).await;
        let report = BenchmarkReport::new(
            self.config.base_url(),
            results,
            self.config.sizes.len(),
            self.config.target_ms_per_1k,
        );

        info!(
            successful = report.summary.successful_trials,
            total = report.summary.total_trials,
            meets_target = report.summary.meets_target(),
            "Benchmark sweep finished"
        );
        Ok(report)
    }
}

fn failure_result(
    dialect: Dialect,
    size: i64,
    actual_lines: usize,
    duration_ms: f64,
    err: &ServiceError,
) -> BenchmarkResult {
    let duration = err.has_response().then_some(duration_ms);
    BenchmarkResult::failure(dialect, size, actual_lines, duration, err.kind(), err.to_string())
}
