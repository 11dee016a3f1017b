use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::controller::{Notifier, Renderer};
use crate::client::identity::{AuthError, AuthResult, IdentityProvider};

// ============================================================================
// MockIdentityProvider
// ============================================================================

/// Counts provider calls and fails the next one on demand. Success
/// notifications are pushed by the test itself through the channel,
/// mirroring how the real provider reports outcomes.
#[derive(Default)]
pub struct MockIdentityProvider {
    sign_in_calls: AtomicUsize,
    sign_up_calls: AtomicUsize,
    sign_out_calls: AtomicUsize,
    fail_with: Mutex<Option<String>>,
}

impl MockIdentityProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_next(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn sign_in_count(&self) -> usize {
        self.sign_in_calls.load(Ordering::SeqCst)
    }

    pub fn sign_up_count(&self) -> usize {
        self.sign_up_calls.load(Ordering::SeqCst)
    }

    pub fn sign_out_count(&self) -> usize {
        self.sign_out_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.sign_in_count() + self.sign_up_count() + self.sign_out_count()
    }

    fn outcome(&self) -> AuthResult<()> {
        match self.fail_with.lock().unwrap().take() {
            Some(message) => Err(AuthError(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn sign_in(&self, _email: &str, _password: &str) -> AuthResult<()> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome()
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> AuthResult<()> {
        self.sign_up_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome()
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome()
    }
}

// ============================================================================
// RecordingRenderer
// ============================================================================

/// Records every mounted document; clones share the log.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    mounts: Arc<Mutex<Vec<String>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_mount(&self) -> Option<String> {
        self.mounts.lock().unwrap().last().cloned()
    }

    pub fn mount_count(&self) -> usize {
        self.mounts.lock().unwrap().len()
    }
}

impl Renderer for RecordingRenderer {
    fn mount(&mut self, html: &str) {
        self.mounts.lock().unwrap().push(html.to_string());
    }
}

// ============================================================================
// RecordingNotifier
// ============================================================================

/// Records every alert instead of blocking; clones share the log.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
