//! Analysis endpoint.

use crate::StubConfig;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use parsebench_core::AnalysisRequest;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// `POST /analyze`.
pub fn routes() -> Router<Arc<StubConfig>> {
    Router::new().route("/analyze", post(analyze))
}

async fn analyze(
    State(config): State<Arc<StubConfig>>,
    Json(request): Json<AnalysisRequest>,
) -> Response {
    let file_name = request
        .files
        .first()
        .map(|f| f.name.clone())
        .unwrap_or_default();

    info!(
        file_name = %file_name,
        files = request.files.len(),
        "Analysis request received"
    );

    if config.stalled_files.contains(&file_name) {
        tokio::time::sleep(config.stall).await;
    } else {
        tokio::time::sleep(config.delay).await;
    }

    if config.failing_files.contains(&file_name) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("analysis failed for {file_name}"),
        )
            .into_response();
    }

    if config.malformed {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }

    let results: Vec<Value> = request
        .files
        .iter()
        .map(|file| {
            json!({
                "file_name": file.name,
                "metrics": {
                    "lines_of_code": file.content.lines().count(),
                    "functions_count": config.metrics.functions_count,
                    "classes_count": config.metrics.classes_count,
                    "complexity_score": config.metrics.complexity_score
                },
                "findings": []
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "results": results,
            "execution_time_ms": config.delay.as_millis() as u64
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use crate::{spawn_local, StubConfig};
    use parsebench_core::{AnalysisRequest, AnalysisResponse, RuleConfig};
    use std::time::Duration;

    #[tokio::test]
    async fn test_analyze_returns_canned_metrics() {
        let addr = spawn_local(StubConfig::default().with_delay(Duration::ZERO))
            .await
            .unwrap();
        let request =
            AnalysisRequest::single("a.js", "let a = 1;\nlet b = 2;", RuleConfig::default());

        let response = reqwest::Client::new()
            .post(format!("http://{addr}/analyze"))
            .json(&request)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: AnalysisResponse = response.json().await.unwrap();
        assert_eq!(body.results.len(), 1);
        assert_eq!(body.results[0].metrics.functions_count, 2);
        assert_eq!(body.results[0].metrics.classes_count, 1);
        assert_eq!(body.results[0].metrics.complexity_score, 5.0);
        assert!(body.results[0].findings.is_empty());
    }

    #[tokio::test]
    async fn test_failing_file_gets_server_error() {
        let config = StubConfig::default()
            .with_delay(Duration::ZERO)
            .failing("bad.ts");
        let addr = spawn_local(config).await.unwrap();
        let request = AnalysisRequest::single("bad.ts", "", RuleConfig::default());

        let response = reqwest::Client::new()
            .post(format!("http://{addr}/analyze"))
            .json(&request)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_health_reflects_config() {
        let healthy = spawn_local(StubConfig::default()).await.unwrap();
        let unhealthy = spawn_local(StubConfig::default().unhealthy()).await.unwrap();
        let client = reqwest::Client::new();

        let ok = client.get(format!("http://{healthy}/health")).send().await.unwrap();
        assert_eq!(ok.status(), reqwest::StatusCode::OK);

        let down = client.get(format!("http://{unhealthy}/health")).send().await.unwrap();
        assert_eq!(down.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
    }
}
