//! Stub analysis service.
//!
//! Implements the two endpoints the harness drives, `GET /health` and
//! `POST /analyze`, with canned metrics and a configurable processing delay.
//! Individual files can be made to fail with a 500 or to stall past a
//! client's timeout, which makes it the fixture for the harness's
//! integration tests.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod routes;

use axum::Router;
use parsebench_core::FileMetrics;
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

/// Behaviour of the stub service.
#[derive(Debug, Clone)]
pub struct StubConfig {
    /// Delay before answering each analysis request.
    pub delay: Duration,
    /// Metrics reported for every file.
    pub metrics: FileMetrics,
    /// Whether `/health` answers 200.
    pub healthy: bool,
    /// Files answered with a 500.
    pub failing_files: HashSet<String>,
    /// Files answered only after `stall`.
    pub stalled_files: HashSet<String>,
    /// Delay applied to stalled files.
    pub stall: Duration,
    /// Answer 200 with a body that is not JSON.
    pub malformed: bool,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(10),
            metrics: FileMetrics {
                functions_count: 2,
                classes_count: 1,
                complexity_score: 5.0,
            },
            healthy: true,
            failing_files: HashSet::new(),
            stalled_files: HashSet::new(),
            stall: Duration::from_secs(60),
            malformed: false,
        }
    }
}

impl StubConfig {
    /// Set the per-request delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Answer requests for `file_name` with a 500.
    pub fn failing(mut self, file_name: impl Into<String>) -> Self {
        self.failing_files.insert(file_name.into());
        self
    }

    /// Hold requests for `file_name` for `stall` before answering.
    pub fn stalled(mut self, file_name: impl Into<String>, stall: Duration) -> Self {
        self.stalled_files.insert(file_name.into());
        self.stall = stall;
        self
    }

    /// Report unhealthy on `/health`.
    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    /// Answer analysis requests with a non-JSON body.
    pub fn malformed(mut self) -> Self {
        self.malformed = true;
        self
    }
}

/// Build the service router.
pub fn app(config: StubConfig) -> Router {
    routes::routes()
        .with_state(Arc::new(config))
        .layer(TraceLayer::new_for_http())
}

/// Bind to `addr` and serve in the background, returning the bound address.
///
/// Pass port 0 to let the OS pick a free port.
pub async fn spawn(config: StubConfig, addr: SocketAddr) -> std::io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    let app = app(config);

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            tracing::error!(error = %err, "Stub analyzer stopped");
        }
    });

    Ok(local)
}

/// Serve on an OS-assigned localhost port.
pub async fn spawn_local(config: StubConfig) -> std::io::Result<SocketAddr> {
    spawn(config, SocketAddr::from(([127, 0, 0, 1], 0))).await
}
