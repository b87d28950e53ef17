// Copyright 2025 LLM Observatory Contributors
// SPDX-License-Identifier: Apache-2.0

//! The analysis service seam.

use crate::error::Result;
use async_trait::async_trait;
use parsebench_core::{AnalysisRequest, AnalysisResponse};

/// An analysis service the driver can benchmark.
///
/// Implement this trait for anything that accepts an analysis batch: the
/// HTTP client in [`crate::client`] for real runs, or an in-process stand-in
/// in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisTarget: Send + Sync {
    /// Liveness probe. An error aborts the run before any trial.
    async fn check_health(&self) -> Result<()>;

    /// Submit one analysis batch and return the parsed response.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse>;
}
