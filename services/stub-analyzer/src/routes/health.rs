//! Liveness endpoint.

use crate::StubConfig;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

/// `GET /` and `GET /health`.
pub fn routes() -> Router<Arc<StubConfig>> {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
}

async fn health_check(State(config): State<Arc<StubConfig>>) -> (StatusCode, Json<Value>) {
    if config.healthy {
        (StatusCode::OK, Json(json!({ "status": "healthy" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unhealthy" })),
        )
    }
}
