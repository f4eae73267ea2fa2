use thiserror::Error;

use crate::errors::domain::DomainError;

/// Application-level error for the binary and the prompt layer.
///
/// Domain failures that survive the re-prompt loops (plus I/O and
/// configuration failures) end up here and abort the game.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error [{code}]: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        AppError::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        AppError::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => AppError::Validation {
                code: kind.code(),
                detail,
            },
            DomainError::Invariant(detail) => AppError::Internal { detail },
        }
    }
}
