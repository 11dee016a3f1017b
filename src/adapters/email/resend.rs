use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    app_error::{AppError, AppResult},
    application::ports::EmailSender,
};

const RESEND_API_BASE: &str = "https://api.resend.com";

pub struct ResendMailer {
    client: Client,
    api_key: SecretString,
    from: String,
}

impl ResendMailer {
    pub fn new(api_key: SecretString, from: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            from,
        }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// Resend failure bodies carry `{"statusCode", "name", "message"}`.
#[derive(Deserialize)]
struct ResendErrorResponse {
    message: String,
}

#[async_trait]
impl EmailSender for ResendMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        let body = SendEmailRequest {
            from: &self.from,
            to: [to],
            subject,
            html,
        };

        let response = self
            .client
            .post(format!("{}/emails", RESEND_API_BASE))
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Resend request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        tracing::error!(status = %status, "Resend API error");

        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ResendErrorResponse>(&text) {
            Ok(error) => Err(AppError::Upstream(error.message)),
            Err(_) => Err(AppError::Upstream(format!("Resend API error: {}", status))),
        }
    }
}
