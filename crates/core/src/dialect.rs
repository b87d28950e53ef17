// Copyright 2025 LLM Observatory Contributors
// SPDX-License-Identifier: Apache-2.0

//! Source dialects exercised by the benchmark.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A synthetic source-code dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// Dynamically-typed dialect.
    JavaScript,
    /// Statically-typed dialect.
    TypeScript,
}

impl Dialect {
    /// Every dialect, in the order trials run for a given size.
    pub const ALL: [Dialect; 2] = [Dialect::JavaScript, Dialect::TypeScript];

    /// Human-readable label used in results and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
        }
    }

    /// File extension the analysis service uses to detect the language.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
        }
    }

    /// Deterministic file name for a trial of `target_lines` lines.
    pub fn file_name(&self, target_lines: i64) -> String {
        format!("test_{}_lines.{}", target_lines, self.extension())
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            other => Err(format!("unknown dialect: {other}")),
        }
    }
}
