//! Health check controller.

use axum::{response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Liveness probe response.
#[derive(Debug, Serialize, Deserialize)]
pub struct PongResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Creates the health router.
pub fn router() -> Router {
    Router::new()
        .route("/pong", get(ping))
        .route("/health", get(health_check))
}

/// Liveness probe.
pub async fn ping() -> impl IntoResponse {
    Json(PongResponse {
        message: "pong".to_string(),
    })
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
