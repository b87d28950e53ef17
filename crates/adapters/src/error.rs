// Copyright 2025 LLM Observatory Contributors
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while talking to the analysis service.

use parsebench_benchmarks::FailureKind;
use thiserror::Error;

/// Errors that can occur during a service call.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No response was received (connection refused, DNS, TLS, ...)
    #[error("Service unreachable: {0}")]
    Unreachable(String),

    /// The call exceeded its timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The service answered with a non-success status
    #[error("HTTP {status}: {body}")]
    BadStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response body did not have the expected shape
    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    /// Failure category recorded in the trial result.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Unreachable(_) => FailureKind::Unreachable,
            Self::Timeout(_) => FailureKind::Timeout,
            Self::BadStatus { .. } => FailureKind::BadStatus,
            Self::MalformedBody(_) => FailureKind::MalformedBody,
        }
    }

    /// Whether a response arrived before the failure.
    pub fn has_response(&self) -> bool {
        matches!(self, Self::BadStatus { .. } | Self::MalformedBody(_))
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::Timeout(err.to_string())
        } else if err.is_decode() {
            ServiceError::MalformedBody(err.to_string())
        } else {
            ServiceError::Unreachable(err.to_string())
        }
    }
}
