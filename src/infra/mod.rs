pub mod app;
pub mod config;
pub mod oauth_exchange;
pub mod setup;
pub mod stripe_client;
