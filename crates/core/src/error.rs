// Application error shared by the services and the storage adapter

use thiserror::Error;

/// Errors surfaced by the kitchen services.
///
/// Board and record rules raise `DomainError`, which folds into the first
/// three variants; the SQLite adapter maps driver failures onto the rest.
#[derive(Error, Debug)]
pub enum AppError {
    /// Form input rejected (blank, too long, out of range, unknown choice)
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Status change not allowed from the current status
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Database error: {0}")]
    Database(String),

    /// Stored data the services cannot interpret
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
