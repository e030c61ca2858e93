use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Checkout unavailable: {0}")]
    CheckoutUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Custom error: {0}")]
    Custom(String),
}
