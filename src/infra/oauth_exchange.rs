use async_trait::async_trait;

use crate::{app_error::AppResult, application::ports::TokenExchanger};

/// Placeholder for the code-for-token exchange against the provider's
/// token endpoint. The exchange has never been implemented; until it
/// is, any received code is accepted so the redirect back into the app
/// keeps working.
pub struct StubTokenExchanger;

#[async_trait]
impl TokenExchanger for StubTokenExchanger {
    async fn exchange_code(&self, code: &str) -> AppResult<()> {
        // The code itself is a credential; log only its presence.
        tracing::debug!(code_len = code.len(), "token exchange not implemented, accepting code");
        Ok(())
    }
}
