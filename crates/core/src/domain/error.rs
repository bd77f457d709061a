// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },
}

impl DomainError {
    pub fn transition(from: impl ToString, to: impl ToString) -> Self {
        DomainError::InvalidStateTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        DomainError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<DomainError> for crate::error::AppError {
    fn from(err: DomainError) -> Self {
        use crate::error::AppError;
        match err {
            DomainError::InvalidStateTransition { .. } => AppError::InvalidState(err.to_string()),
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Validation { .. } => AppError::Validation(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
