use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult, application::ports::LineItem,
};

#[derive(Deserialize)]
struct CheckoutPayload {
    items: Vec<LineItem>,
    #[serde(rename = "customerEmail")]
    customer_email: String,
}

#[derive(Serialize)]
struct CheckoutResponse {
    id: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/checkout", post(create_checkout))
}

/// POST /api/checkout
///
/// Creates a checkout session with the payment provider and returns its
/// opaque id for the client to redirect with.
async fn create_checkout(
    State(app_state): State<AppState>,
    Json(payload): Json<CheckoutPayload>,
) -> AppResult<impl IntoResponse> {
    let session_id = app_state
        .checkout
        .create_checkout_session(&payload.items, &payload.customer_email)
        .await?;

    Ok(Json(CheckoutResponse {
        id: session_id.to_string(),
    }))
}
