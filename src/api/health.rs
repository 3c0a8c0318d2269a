//! Health check endpoints

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;

use super::state::AppState;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub checks: Vec<HealthCheck>,
    pub latency_ms: u64,
}

/// Health check status
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize, Debug)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    pub message: String,
    pub latency_ms: u64,
}

/// Health check - healthy only while the registry holds at least one member
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let check = check_team_members(&state).await;
    let status = check.status;

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: vec![check],
        latency_ms: start.elapsed().as_millis() as u64,
    };

    let status_code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn check_team_members(state: &AppState) -> HealthCheck {
    let start = Instant::now();

    let (status, message) = match state.registry.count().await {
        Ok(count) if count > 0 => (
            HealthStatus::Healthy,
            "Team members contains at least one element.".to_string(),
        ),
        Ok(_) => (
            HealthStatus::Unhealthy,
            "There are no team members registered...".to_string(),
        ),
        Err(e) => (HealthStatus::Unhealthy, e.to_string()),
    };

    HealthCheck {
        name: "team_members".to_string(),
        status,
        message,
        latency_ms: start.elapsed().as_millis() as u64,
    }
}
