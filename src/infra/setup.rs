use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{email::resend::ResendMailer, http::app_state::AppState},
    application::ports::{CheckoutProvider, EmailSender, TokenExchanger},
    infra::{
        config::AppConfig,
        oauth_exchange::StubTokenExchanger,
        stripe_client::{CheckoutSettings, StripeClient},
    },
};

pub fn init_app_state() -> AppState {
    let config = Arc::new(AppConfig::from_env());

    let email: Arc<dyn EmailSender> = Arc::new(ResendMailer::new(
        SecretString::new(config.resend_api_key.expose_secret().into()),
        config.email_from.clone(),
    ));

    let checkout: Arc<dyn CheckoutProvider> = Arc::new(StripeClient::new(
        SecretString::new(config.stripe_secret_key.expose_secret().into()),
        CheckoutSettings {
            success_url: config.checkout_success_url.clone(),
            cancel_url: config.checkout_cancel_url.clone(),
            mode: config.checkout_mode.clone(),
        },
    ));

    let exchanger: Arc<dyn TokenExchanger> = Arc::new(StubTokenExchanger);

    AppState {
        config,
        email,
        checkout,
        exchanger,
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ccs_hyper=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
        .ok();
}
