use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::error::{api_success, api_success_with_message, ApiError, ApiResponse};
use crate::server::OncoformsServer;

/// Row echoed by the connectivity probe
#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct TestConnectionRow {
    pub test: i32,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall process health status
    pub status: String,
    /// Current timestamp in RFC3339 format
    pub timestamp: String,
    /// API version
    pub version: String,
    /// Individual service health checks
    pub checks: HashMap<String, String>,
}

/// Database connectivity probe
///
/// Runs `SELECT 1 AS test` through the shared pool and echoes the rows, so a
/// reachable database answers with `test = 1`.
#[utoipa::path(
    get,
    path = "/test-connection",
    tag = "health",
    responses(
        (status = 200, description = "Database is reachable", body = Vec<TestConnectionRow>),
        (status = 500, description = "Database is unreachable")
    )
)]
pub async fn test_connection(
    State(server): State<OncoformsServer>,
) -> Result<Json<ApiResponse<Vec<TestConnectionRow>>>, ApiError> {
    let rows = server
        .executor()
        .fetch_all_with("SELECT 1 AS test", |q| q)
        .await?;

    Ok(Json(api_success_with_message(rows, "Connected to database")))
}

/// Health check handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is serving requests", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(server): State<OncoformsServer>,
) -> Result<Json<ApiResponse<HealthResponse>>, ApiError> {
    let database = if server.db.is_healthy().await {
        "healthy"
    } else {
        "unreachable"
    };

    let mut checks = HashMap::new();
    checks.insert("database".to_string(), database.to_string());

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    };

    Ok(Json(api_success(response)))
}
