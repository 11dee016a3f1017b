use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
};

#[derive(Deserialize)]
struct CallbackQuery {
    code: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/callback", get(callback))
}

/// GET /api/auth/callback
///
/// The provider lands the user here after its consent screen. Exchanges
/// the authorization code and bounces back into the app.
async fn callback(
    State(app_state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> AppResult<impl IntoResponse> {
    let code = query
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Authorization code not found.".to_string()))?;

    app_state.exchanger.exchange_code(&code).await.map_err(|_| {
        AppError::Upstream("Failed to exchange authorization code for token.".to_string())
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, "/?auth=success")]))
}
