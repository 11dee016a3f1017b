use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A provider (payment, email, identity) rejected or failed the
    /// call. The message is the provider's own and is returned to the
    /// caller verbatim.
    #[error("{0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;
