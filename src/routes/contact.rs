use axum::{
    Json,
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use folio_contact::ContactSubmission;

use crate::routes::AppState;

/// POST /contact
///
/// Answers 200 for success and field errors, 500 for configuration and
/// delivery failures.
pub async fn action(
    State(app_state): State<AppState>,
    Form(input): Form<ContactSubmission>,
) -> impl IntoResponse {
    let result = app_state
        .contact
        .handle(input, &app_state.config.delivery)
        .await;

    let status = if result.is_failure() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    (status, Json(result))
}
