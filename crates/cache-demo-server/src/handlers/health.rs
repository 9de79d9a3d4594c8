//! Liveness check

use axum::Json;
use cache_demo_types::HealthStatus;

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
