//! Handlers for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::error::AppError;
use crate::state::{ShortenerState, TodoState};

type HealthResult = Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)>;

/// Returns shortener health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database query failed
pub async fn shortener_health_handler(State(state): State<ShortenerState>) -> HealthResult {
    let count = state.url_service.count().await;
    respond(check_database(count, "urls"))
}

/// Returns to-do service health status.
///
/// # Endpoint
///
/// `GET /health`
pub async fn todo_health_handler(State(state): State<TodoState>) -> HealthResult {
    let count = state.item_service.count().await;
    respond(check_database(count, "items"))
}

fn check_database(count: Result<i64, AppError>, table: &str) -> CheckStatus {
    match count {
        Ok(rows) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, {rows} {table}")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {}", e)),
        },
    }
}

fn respond(database: CheckStatus) -> HealthResult {
    let healthy = database.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
