//! The auth-state-driven view controller: renders exactly one of
//! {loading, login, signup, dashboard} from the identity provider's
//! state-change notifications.

pub mod controller;
pub mod identity;
pub mod supabase;
pub mod view;

pub use controller::{Notifier, Renderer, ViewController};
pub use identity::{AuthChange, AuthError, IdentityProvider, Session, User};
pub use view::{AuthMode, Node, ViewState, view};
