//! HTTP endpoint for the plate benchmark.
//!
//! Endpoints:
//! - `POST /api/benchmark` - run a benchmark, body `{"n": int, "x": int}`
//! - `GET  /health`        - liveness check

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{info, warn};

use crate::benchmark::{BenchmarkConfig, benchmark_plates};
use crate::error::{PlateBenchError, Result};
use crate::{BenchmarkRequest, BenchmarkResponse};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Runner settings applied to every request
    pub benchmark: BenchmarkConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            benchmark: BenchmarkConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Address string for binding, e.g. `"0.0.0.0:8080"`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl IntoResponse for PlateBenchError {
    fn into_response(self) -> Response {
        let status = match &self {
            PlateBenchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

/// Build the router with the benchmark and health endpoints.
pub fn router(config: BenchmarkConfig) -> Router {
    Router::new()
        .route("/api/benchmark", post(benchmark_handler))
        .route(
            "/health",
            get(|| async { Json(serde_json::json!({"status": "healthy"})) }),
        )
        .with_state(config)
}

/// Decode a benchmark request from a raw body.
pub fn parse_request(body: &[u8]) -> Result<BenchmarkRequest> {
    Ok(serde_json::from_slice(body)?)
}

/// Handle `POST /api/benchmark`.
///
/// Generation and timing are CPU-bound, so they run on the blocking pool.
pub async fn benchmark_handler(
    State(config): State<BenchmarkConfig>,
    body: Bytes,
) -> Result<Json<BenchmarkResponse>> {
    let request = parse_request(&body).inspect_err(|e| warn!("[Server] Bad request: {}", e))?;

    let response = tokio::task::spawn_blocking(move || {
        let mut rng = request.scenario(&config).rng();
        let report = benchmark_plates(request.counts(&config), &config, &mut rng);
        BenchmarkResponse::from_report(&report)
    })
    .await
    .map_err(|e| PlateBenchError::Task(e.to_string()))?;

    Ok(Json(response))
}

/// Bind and serve until Ctrl+C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("[Server] Listening on http://{}", bind_addr);
    info!("[Server]   POST /api/benchmark - run palindrome benchmark");
    info!("[Server]   GET  /health        - health check");

    axum::serve(listener, router(config.benchmark))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("[Server] Stopped");
    Ok(())
}

/// Build a multi-threaded runtime and serve on it.
pub fn run_server(config: ServerConfig) -> Result<()> {
    let runtime =
        tokio::runtime::Runtime::new().map_err(|e| PlateBenchError::Runtime(e.to_string()))?;
    runtime.block_on(serve(config))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("[Server] Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
}
