use std::sync::Arc;

use crate::{
    application::ports::{CheckoutProvider, EmailSender, TokenExchanger},
    infra::config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub email: Arc<dyn EmailSender>,
    pub checkout: Arc<dyn CheckoutProvider>,
    pub exchanger: Arc<dyn TokenExchanger>,
}
