use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    /// API key for the email provider. Never logged or echoed.
    pub resend_api_key: SecretString,
    /// Secret key for the payment provider. Never logged or echoed.
    pub stripe_secret_key: SecretString,
    /// Sender address for outgoing notifications, e.g.
    /// `CCS Hyper <notifications@yourdomain.com>`.
    pub email_from: String,
    /// Public base URL of the deployed site, used to build redirect
    /// targets.
    pub public_url: Url,
    pub checkout_success_url: Url,
    pub checkout_cancel_url: Url,
    /// Stripe checkout mode: `subscription` or `payment`.
    pub checkout_mode: String,
    pub cors_origin: HeaderValue,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let resend_api_key: SecretString =
            SecretString::new(get_env::<String>("RESEND_API_KEY").into());
        let stripe_secret_key: SecretString =
            SecretString::new(get_env::<String>("STRIPE_SECRET_KEY").into());

        let email_from: String = get_env("EMAIL_FROM");
        let public_url: Url = get_env("PUBLIC_URL");

        // The pages the payment processor redirects back to. Both default
        // to the conventional locations under the public URL but can be
        // pointed elsewhere independently.
        let checkout_success_url: Url = get_env_default(
            "CHECKOUT_SUCCESS_URL",
            public_url
                .join("success.html")
                .expect("PUBLIC_URL must be a valid base URL"),
        );
        let checkout_cancel_url: Url = get_env_default(
            "CHECKOUT_CANCEL_URL",
            public_url
                .join("cancel.html")
                .expect("PUBLIC_URL must be a valid base URL"),
        );
        let checkout_mode: String =
            get_env_default("CHECKOUT_MODE", String::from("subscription"));

        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());

        Self {
            resend_api_key,
            stripe_secret_key,
            email_from,
            public_url,
            checkout_success_url,
            checkout_cancel_url,
            checkout_mode,
            cors_origin,
            bind_addr,
        }
    }
}
