use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use folio_contact::SubmissionHandler;
use serde_json::json;

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact: SubmissionHandler,
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "not found"})))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/contact", post(contact::action))
        .fallback(fallback)
        .with_state(app_state)
}
