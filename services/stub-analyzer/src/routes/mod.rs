//! HTTP routes of the stub analyzer.

pub mod analyze;
pub mod health;

use crate::StubConfig;
use axum::Router;
use std::sync::Arc;

/// All routes, sharing the stub configuration as state.
pub fn routes() -> Router<Arc<StubConfig>> {
    Router::new()
        .merge(health::routes())
        .merge(analyze::routes())
}
