use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use serde::Deserialize;

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

#[derive(Deserialize)]
struct NotificationPayload {
    to: String,
    subject: String,
    html: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/notifications", post(send_notification))
}

/// POST /api/notifications
///
/// Relays one email through the provider. No retries; the single
/// outcome is reported as-is.
async fn send_notification(
    State(app_state): State<AppState>,
    Json(payload): Json<NotificationPayload>,
) -> AppResult<impl IntoResponse> {
    app_state
        .email
        .send(&payload.to, &payload.subject, &payload.html)
        .await?;

    Ok(Json(
        serde_json::json!({ "message": "Notification sent successfully." }),
    ))
}
