// Copyright 2025 LLM Observatory Contributors
// SPDX-License-Identifier: Apache-2.0

//! Wire types for the analysis service.
//!
//! The harness only depends on a narrow slice of the service's response:
//! the metrics block and the findings list of the first file result. Every
//! other field the service sends is ignored.

use serde::{Deserialize, Serialize};

/// A single named source file in an analysis batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// File name, including the extension.
    pub name: String,
    /// Full file contents.
    pub content: String,
}

/// Analysis rule configuration sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Cyclomatic complexity above which a finding is reported.
    pub complexity_threshold: u32,
    /// Maximum function length in lines.
    pub max_function_length: u32,
    /// Whether security rules run.
    pub enable_security_rules: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            complexity_threshold: 10,
            max_function_length: 50,
            enable_security_rules: true,
        }
    }
}

/// Request body of the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Files to analyze.
    pub files: Vec<SourceFile>,
    /// Rules applied to every file.
    pub rules: RuleConfig,
}

impl AnalysisRequest {
    /// Build a request carrying a single file.
    pub fn single(name: impl Into<String>, content: impl Into<String>, rules: RuleConfig) -> Self {
        Self {
            files: vec![SourceFile {
                name: name.into(),
                content: content.into(),
            }],
            rules,
        }
    }
}

/// Structural metrics the service computes per file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetrics {
    /// Number of functions detected.
    pub functions_count: u64,
    /// Number of classes detected.
    pub classes_count: u64,
    /// Aggregate complexity score.
    pub complexity_score: f64,
}

/// Per-file analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAnalysisResult {
    /// Computed metrics.
    pub metrics: FileMetrics,
    /// Findings, kept opaque.
    #[serde(default)]
    pub findings: Vec<serde_json::Value>,
}

/// Response body of the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// One entry per submitted file, in submission order.
    pub results: Vec<FileAnalysisResult>,
}

impl AnalysisResponse {
    /// The result for the first submitted file, if any.
    pub fn first(&self) -> Option<&FileAnalysisResult> {
        self.results.first()
    }
}
