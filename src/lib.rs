pub mod adapters;
pub mod application;
pub mod client;
pub mod infra;


// Re-exports for shorter use statements.
pub use application::*;
