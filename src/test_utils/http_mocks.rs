use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::ports::{
        CheckoutProvider, CheckoutSessionId, EmailSender, LineItem, TokenExchanger,
    },
    infra::config::AppConfig,
};

// ============================================================================
// MockEmailSender
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Captures outgoing emails; optionally fails with a fixed provider
/// message instead.
#[derive(Default)]
pub struct MockEmailSender {
    sent: Mutex<Vec<CapturedEmail>>,
    fail_with: Option<String>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn captured_emails(&self) -> Vec<CapturedEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::Upstream(message.clone()));
        }
        self.sent.lock().unwrap().push(CapturedEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

// ============================================================================
// MockCheckoutProvider
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedCheckout {
    pub items: Vec<LineItem>,
    pub customer_email: String,
}

/// Returns a fixed session id and records every request; optionally
/// fails with a fixed provider message instead.
#[derive(Default)]
pub struct MockCheckoutProvider {
    requests: Mutex<Vec<CapturedCheckout>>,
    fail_with: Option<String>,
}

impl MockCheckoutProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn captured_requests(&self) -> Vec<CapturedCheckout> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CheckoutProvider for MockCheckoutProvider {
    async fn create_checkout_session(
        &self,
        items: &[LineItem],
        customer_email: &str,
    ) -> AppResult<CheckoutSessionId> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::Upstream(message.clone()));
        }
        self.requests.lock().unwrap().push(CapturedCheckout {
            items: items.to_vec(),
            customer_email: customer_email.to_string(),
        });
        Ok(CheckoutSessionId::new("cs_test_a1b2c3"))
    }
}

// ============================================================================
// MockTokenExchanger
// ============================================================================

/// Records received codes; optionally refuses every exchange.
#[derive(Default)]
pub struct MockTokenExchanger {
    codes: Mutex<Vec<String>>,
    fail: bool,
}

impl MockTokenExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            codes: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn received_codes(&self) -> Vec<String> {
        self.codes.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenExchanger for MockTokenExchanger {
    async fn exchange_code(&self, code: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Upstream("exchange refused".to_string()));
        }
        self.codes.lock().unwrap().push(code.to_string());
        Ok(())
    }
}

// ============================================================================
// TestAppStateBuilder
// ============================================================================

fn test_config() -> AppConfig {
    AppConfig {
        resend_api_key: SecretString::new("re_test_key".into()),
        stripe_secret_key: SecretString::new("sk_test_key".into()),
        email_from: "CCS Hyper <notifications@example.com>".to_string(),
        public_url: "http://localhost:3000".parse().unwrap(),
        checkout_success_url: "http://localhost:3000/success.html".parse().unwrap(),
        checkout_cancel_url: "http://localhost:3000/cancel.html".parse().unwrap(),
        checkout_mode: "subscription".to_string(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
    }
}

/// Builds an `AppState` wired to in-memory mocks, returning the mocks
/// alongside it for assertions.
pub struct TestAppStateBuilder {
    email: Arc<MockEmailSender>,
    checkout: Arc<MockCheckoutProvider>,
    exchanger: Arc<MockTokenExchanger>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            email: Arc::new(MockEmailSender::new()),
            checkout: Arc::new(MockCheckoutProvider::new()),
            exchanger: Arc::new(MockTokenExchanger::new()),
        }
    }

    pub fn with_email(mut self, email: MockEmailSender) -> Self {
        self.email = Arc::new(email);
        self
    }

    pub fn with_checkout(mut self, checkout: MockCheckoutProvider) -> Self {
        self.checkout = Arc::new(checkout);
        self
    }

    pub fn with_exchanger(mut self, exchanger: MockTokenExchanger) -> Self {
        self.exchanger = Arc::new(exchanger);
        self
    }

    pub fn build(
        self,
    ) -> (
        AppState,
        Arc<MockEmailSender>,
        Arc<MockCheckoutProvider>,
        Arc<MockTokenExchanger>,
    ) {
        let app_state = AppState {
            config: Arc::new(test_config()),
            email: self.email.clone(),
            checkout: self.checkout.clone(),
            exchanger: self.exchanger.clone(),
        };
        (app_state, self.email, self.checkout, self.exchanger)
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
