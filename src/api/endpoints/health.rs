//! Health check endpoint for load balancers and monitoring.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::config::{SERVICE_VERSION, SYSTEM_LABEL};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub system: &'static str,
    pub environment: String,
}

/// `GET /health`
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: SERVICE_VERSION,
        system: SYSTEM_LABEL,
        environment: ctx.config.environment.clone(),
    })
}
