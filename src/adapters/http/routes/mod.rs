pub mod auth;
pub mod checkout;
pub mod notifications;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(notifications::router())
        .merge(checkout::router())
}
