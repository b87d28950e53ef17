// Copyright 2025 LLM Observatory Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the analysis service.
//!
//! Wraps the two endpoints the harness needs, `GET /health` and
//! `POST /analyze`, using [`reqwest`]. Every call is bounded by a timeout;
//! nothing is retried.

use crate::error::{Result, ServiceError};
use crate::target::AnalysisTarget;
use async_trait::async_trait;
use parsebench_core::{AnalysisRequest, AnalysisResponse, BenchConfig};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Liveness endpoint path.
pub const HEALTH_PATH: &str = "/health";

/// Analysis endpoint path.
pub const ANALYZE_PATH: &str = "/analyze";

/// HTTP client for a single analysis service instance.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    base_url: String,
    health_timeout: Duration,
}

impl HttpAnalysisClient {
    /// Create a client for the service at `base_url`.
    ///
    /// * `request_timeout` - bound on each analysis call
    /// * `health_timeout` - bound on the liveness probe
    pub fn new(
        base_url: impl Into<String>,
        request_timeout: Duration,
        health_timeout: Duration,
    ) -> std::result::Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(request_timeout).build()?;
        Ok(Self::with_client(client, base_url, health_timeout))
    }

    /// Create a client from run configuration.
    pub fn from_config(config: &BenchConfig) -> std::result::Result<Self, reqwest::Error> {
        Self::new(config.base_url(), config.request_timeout(), config.health_timeout())
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        health_timeout: Duration,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            health_timeout,
        }
    }

    /// Base address of the service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AnalysisTarget for HttpAnalysisClient {
    async fn check_health(&self) -> Result<()> {
        let url = self.url(HEALTH_PATH);
        debug!(url = %url, "Probing analysis service");

        let response = self
            .client
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ServiceError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        let url = self.url(ANALYZE_PATH);
        debug!(url = %url, files = request.files.len(), "Submitting analysis batch");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ServiceError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AnalysisResponse =
            serde_json::from_str(&body).map_err(|e| ServiceError::MalformedBody(e.to_string()))?;
        if parsed.results.is_empty() {
            return Err(ServiceError::MalformedBody(
                "response contains no file results".to_string(),
            ));
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HttpAnalysisClient::new(
            "http://localhost:8080/",
            Duration::from_secs(30),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url(ANALYZE_PATH), "http://localhost:8080/analyze");
    }

    #[test]
    fn test_from_config() {
        let mut config = BenchConfig::default();
        config.base_url = "http://analyzer:9000".to_string();
        let client = HttpAnalysisClient::from_config(&config).unwrap();
        assert_eq!(client.url(HEALTH_PATH), "http://analyzer:9000/health");
    }
}
