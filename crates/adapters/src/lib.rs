// Copyright 2025 LLM Observatory Contributors
// SPDX-License-Identifier: Apache-2.0

//! Analysis service adapters and the benchmark driver.
//!
//! This crate connects the pure benchmark core to a running analysis
//! service:
//!
//! - **Target**: the [`AnalysisTarget`] trait, the seam between the driver
//!   and the service
//! - **Client**: [`HttpAnalysisClient`], the reqwest implementation
//! - **Driver**: [`BenchmarkDriver`], which sweeps sizes and dialects and
//!   assembles the report
//!
//! # Architecture
//!
//! Service calls return [`ServiceError`] rather than panicking; the driver
//! turns each error into a failed trial record, so a single bad trial never
//! ends a sweep. Only the liveness probe is fatal.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod client;
pub mod driver;
pub mod error;
pub mod target;

pub use client::HttpAnalysisClient;
pub use driver::BenchmarkDriver;
pub use error::ServiceError;
pub use target::AnalysisTarget;
