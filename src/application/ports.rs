use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::app_error::AppResult;

/// A checkout line item as accepted on the wire: a provider price id
/// plus a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub price: String,
    pub quantity: u32,
}

/// Opaque id of a checkout session created by the payment provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionId(pub String);

impl CheckoutSessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CheckoutSessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    async fn create_checkout_session(
        &self,
        items: &[LineItem],
        customer_email: &str,
    ) -> AppResult<CheckoutSessionId>;
}

/// Server-side half of the OAuth flow: turn an authorization code into
/// provider tokens. The production adapter is a stub; see
/// `infra::oauth_exchange`.
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    async fn exchange_code(&self, code: &str) -> AppResult<()>;
}
