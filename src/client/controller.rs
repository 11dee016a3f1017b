use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::UnboundedReceiver;

use crate::client::{
    identity::{AuthChange, IdentityProvider},
    view::{AuthMode, ViewState, view},
};

/// Owns the single root container. Every mount fully replaces what was
/// there before, so exactly one view exists at any time.
pub trait Renderer: Send {
    fn mount(&mut self, html: &str);
}

/// Blocking user-facing notification, the `alert` of the original UI.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Renders the view matching the current authentication state and
/// translates form submissions into identity-provider calls.
///
/// The controller itself never transitions between logged-in and
/// logged-out views: those transitions are driven exclusively by the
/// provider's state-change notifications arriving through `run`.
pub struct ViewController {
    provider: Arc<dyn IdentityProvider>,
    renderer: Mutex<Box<dyn Renderer>>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<ViewState>,
}

impl ViewController {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        renderer: Box<dyn Renderer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            provider,
            renderer: Mutex::new(renderer),
            notifier,
            state: Mutex::new(ViewState::Loading),
        }
    }

    /// Shows the loading indicator. Everything after this is driven by
    /// the subscription consumed in `run`.
    pub fn initialize(&self) {
        self.render(ViewState::Loading);
    }

    /// Drains state-change notifications until the channel closes
    /// (page lifetime). The single subscription is established once;
    /// there is no unsubscribe path.
    pub async fn run(&self, mut changes: UnboundedReceiver<AuthChange>) {
        while let Some(change) = changes.recv().await {
            self.apply(change);
        }
    }

    /// Handles one state-change notification. Idempotent: the next view
    /// is computed from the notification alone, with no dependency on
    /// what was previously displayed.
    pub fn apply(&self, change: AuthChange) {
        let next = match change {
            AuthChange::SignedIn(session) => ViewState::LoggedIn(session),
            AuthChange::SignedOut => ViewState::LoggedOut(AuthMode::Login),
        };
        self.render(next);
    }

    /// The "create an account" link: client-side only, no provider call,
    /// no history entry.
    pub fn show_signup(&self) {
        self.render(ViewState::LoggedOut(AuthMode::Signup));
    }

    /// The "login to your account" link: client-side only.
    pub fn show_login(&self) {
        self.render(ViewState::LoggedOut(AuthMode::Login));
    }

    /// Submits the login form. On failure the message is surfaced and
    /// the view stays put; on success the transition to the dashboard
    /// arrives as a state-change notification.
    pub async fn handle_login(&self, email: &str, password: &str) {
        if let Err(err) = self.provider.sign_in(email, password).await {
            self.notifier.alert(&err.to_string());
        }
    }

    /// Submits the signup form. Success does not assume an immediate
    /// session; the provider may require email confirmation first.
    pub async fn handle_signup(&self, email: &str, password: &str) {
        match self.provider.sign_up(email, password).await {
            Ok(()) => self
                .notifier
                .alert("Check your email for a confirmation link!"),
            Err(err) => self.notifier.alert(&err.to_string()),
        }
    }

    /// Signs out. The transition back to the login form arrives as a
    /// state-change notification.
    pub async fn handle_logout(&self) {
        if let Err(err) = self.provider.sign_out().await {
            self.notifier.alert(&err.to_string());
        }
    }

    pub fn current_state(&self) -> ViewState {
        self.state.lock().unwrap().clone()
    }

    fn render(&self, next: ViewState) {
        let html = view(&next).to_html();
        self.renderer.lock().unwrap().mount(&html);
        *self.state.lock().unwrap() = next;
    }
}
