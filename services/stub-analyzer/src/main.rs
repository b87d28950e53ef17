//! Stub analyzer entry point.
//!
//! Reads `STUB_HOST`, `STUB_PORT` and `STUB_DELAY_MS` from the environment
//! (or a `.env` file) and serves until interrupted.

use std::net::SocketAddr;
use std::time::Duration;
use stub_analyzer::StubConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stub_analyzer=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let host = std::env::var("STUB_HOST").unwrap_or_else(|_| "127.0.0.1".into());
    let port: u16 = std::env::var("STUB_PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;
    let delay_ms: u64 = std::env::var("STUB_DELAY_MS")
        .unwrap_or_else(|_| "10".into())
        .parse()?;

    let config = StubConfig::default().with_delay(Duration::from_millis(delay_ms));
    let addr = SocketAddr::new(host.parse()?, port);
    let app = stub_analyzer::app(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Stub analyzer listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
