use async_trait::async_trait;
use thiserror::Error;

/// The signed-in user as consumed by the views. Only the email is ever
/// displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
}

/// An opaque session issued by the identity provider. The controller
/// never persists it and reads nothing beyond `user`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

/// State-change notification emitted by the identity provider whenever
/// the current session changes: initial check, login, logout, token
/// refresh. May fire any number of times over the page's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthChange {
    SignedIn(Session),
    SignedOut,
}

/// A failed identity-provider call, carrying the human-readable message
/// shown to the user.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct AuthError(pub String);

pub type AuthResult<T> = Result<T, AuthError>;

/// The external service issuing and invalidating sessions. Successful
/// operations report back through the state-change channel, never
/// through these return values; only failures surface here.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<()>;
    async fn sign_up(&self, email: &str, password: &str) -> AuthResult<()>;
    async fn sign_out(&self) -> AuthResult<()>;
}
