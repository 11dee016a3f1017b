use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::{CheckoutProvider, CheckoutSessionId, LineItem},
};

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

/// Redirect targets and mode applied to every created checkout session.
#[derive(Clone)]
pub struct CheckoutSettings {
    pub success_url: Url,
    pub cancel_url: Url,
    /// `subscription` or `payment`.
    pub mode: String,
}

pub struct StripeClient {
    client: Client,
    secret_key: SecretString,
    settings: CheckoutSettings,
}

impl StripeClient {
    pub fn new(secret_key: SecretString, settings: CheckoutSettings) -> Self {
        Self {
            client: Client::new(),
            secret_key,
            settings,
        }
    }

    fn auth_header(&self) -> String {
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:", self.secret_key.expose_secret()));
        format!("Basic {}", encoded)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read Stripe response: {}", e)))?;

        if !status.is_success() {
            tracing::error!(status = %status, "Stripe API error");

            if let Ok(error) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(AppError::Upstream(
                    error.error.message.unwrap_or(error.error.error_type),
                ));
            }

            return Err(AppError::Upstream(format!("Stripe API error: {}", status)));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Stripe response");
            AppError::Internal(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

#[async_trait]
impl CheckoutProvider for StripeClient {
    async fn create_checkout_session(
        &self,
        items: &[LineItem],
        customer_email: &str,
    ) -> AppResult<CheckoutSessionId> {
        let params = checkout_params(items, customer_email, &self.settings);

        let response = self
            .client
            .post(format!("{}/checkout/sessions", STRIPE_API_BASE))
            .header("Authorization", self.auth_header())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Stripe request failed: {}", e)))?;

        let session: StripeCheckoutSession = self.handle_response(response).await?;
        Ok(CheckoutSessionId::new(session.id))
    }
}

/// Builds the form-encoded body for `POST /checkout/sessions`. Stripe
/// expects arrays as indexed bracket params.
fn checkout_params(
    items: &[LineItem],
    customer_email: &str,
    settings: &CheckoutSettings,
) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = vec![
        ("payment_method_types[0]".to_string(), "card".to_string()),
        ("mode".to_string(), settings.mode.clone()),
        ("customer_email".to_string(), customer_email.to_string()),
        ("success_url".to_string(), settings.success_url.to_string()),
        ("cancel_url".to_string(), settings.cancel_url.to_string()),
    ];

    for (i, item) in items.iter().enumerate() {
        params.push((format!("line_items[{}][price]", i), item.price.clone()));
        params.push((
            format!("line_items[{}][quantity]", i),
            item.quantity.to_string(),
        ));
    }

    params
}

// ============================================================================
// Stripe Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct StripeCheckoutSession {
    id: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    #[serde(rename = "type")]
    error_type: String,
    message: Option<String>,
}
