//! Health check endpoint for container orchestration.
//!
//! Liveness probe used by Docker `HEALTHCHECK`, CI pipelines and load
//! balancers. It only proves the process can answer HTTP.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
