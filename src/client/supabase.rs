use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use url::Url;

use crate::client::identity::{
    AuthChange, AuthError, AuthResult, IdentityProvider, Session, User,
};

/// Identity adapter for the Supabase GoTrue API.
///
/// Constructed explicitly and handed to the controller together with
/// the receiving end of the state-change channel returned by `new`.
pub struct SupabaseAuth {
    client: Client,
    base_url: Url,
    anon_key: SecretString,
    access_token: Mutex<Option<String>>,
    changes: UnboundedSender<AuthChange>,
}

impl SupabaseAuth {
    pub fn new(base_url: Url, anon_key: SecretString) -> (Self, UnboundedReceiver<AuthChange>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                client: Client::new(),
                base_url,
                anon_key,
                access_token: Mutex::new(None),
                changes: tx,
            },
            rx,
        )
    }

    /// Fires the initial state-change notification. Sessions are not
    /// persisted, so a fresh page always starts signed out.
    pub fn connect(&self) {
        self.emit(AuthChange::SignedOut);
    }

    fn emit(&self, change: AuthChange) {
        // A closed channel just means the page is gone.
        let _ = self.changes.send(change);
    }

    fn endpoint(&self, path: &str) -> AuthResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AuthError(format!("Invalid auth endpoint: {}", e)))
    }

    async fn error_message(response: reqwest::Response) -> AuthError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<GoTrueErrorResponse>(&body) {
            Ok(error) => AuthError(error.message()),
            Err(_) => AuthError(format!("Authentication request failed: {}", status)),
        }
    }
}

#[derive(Serialize)]
struct CredentialsPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: UserPayload,
}

#[derive(Deserialize)]
struct UserPayload {
    email: String,
}

/// GoTrue error bodies vary by endpoint; any of these fields may carry
/// the message.
#[derive(Deserialize)]
struct GoTrueErrorResponse {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl GoTrueErrorResponse {
    fn message(self) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .unwrap_or_else(|| "Authentication failed".to_string())
    }
}

#[async_trait]
impl IdentityProvider for SupabaseAuth {
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<()> {
        let url = self.endpoint("auth/v1/token?grant_type=password")?;

        let response = self
            .client
            .post(url)
            .header("apikey", self.anon_key.expose_secret())
            .json(&CredentialsPayload { email, password })
            .send()
            .await
            .map_err(|e| AuthError(format!("Sign-in request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_message(response).await);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError(format!("Malformed sign-in response: {}", e)))?;

        *self.access_token.lock().unwrap() = Some(token.access_token.clone());
        self.emit(AuthChange::SignedIn(Session {
            access_token: token.access_token,
            user: User {
                email: token.user.email,
            },
        }));
        Ok(())
    }

    async fn sign_up(&self, email: &str, password: &str) -> AuthResult<()> {
        let url = self.endpoint("auth/v1/signup")?;

        let response = self
            .client
            .post(url)
            .header("apikey", self.anon_key.expose_secret())
            .json(&CredentialsPayload { email, password })
            .send()
            .await
            .map_err(|e| AuthError(format!("Sign-up request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_message(response).await);
        }

        // No notification here: the account may still need email
        // confirmation before a session exists.
        Ok(())
    }

    async fn sign_out(&self) -> AuthResult<()> {
        let url = self.endpoint("auth/v1/logout")?;
        let token = self.access_token.lock().unwrap().clone();

        let mut request = self
            .client
            .post(url)
            .header("apikey", self.anon_key.expose_secret());
        if let Some(token) = &token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AuthError(format!("Sign-out request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_message(response).await);
        }

        *self.access_token.lock().unwrap() = None;
        self.emit(AuthChange::SignedOut);
        Ok(())
    }
}
