use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Returns 200 OK once every required delivery setting is present
pub async fn ready(State(app_state): State<AppState>) -> impl IntoResponse {
    let missing = app_state.config.delivery.missing();
    if missing.is_empty() {
        return (StatusCode::OK, Json(json!({"status": "ready"})));
    }

    tracing::warn!(?missing, "Readiness check failed: delivery configuration incomplete");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": "not_ready",
            "reason": "delivery_config_incomplete",
            "missing": missing,
        })),
    )
}
