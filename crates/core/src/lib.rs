// Copyright 2025 LLM Observatory Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the ParseBench harness.
//!
//! This crate holds everything the generator, the service client and the
//! command-line front end agree on:
//!
//! - [`dialect`] - The two synthetic source dialects
//! - [`wire`] - Request and response bodies of the analysis service
//! - [`config`] - Run configuration and its layered loader

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod dialect;
pub mod wire;

pub use config::{BenchConfig, ConfigError};
pub use dialect::Dialect;
pub use wire::{
    AnalysisRequest, AnalysisResponse, FileAnalysisResult, FileMetrics, RuleConfig, SourceFile,
};
