use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    InvalidArgument(String),
    /// Carries the entity name, e.g. `"Order"`.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
