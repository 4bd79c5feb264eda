//! Unified error handling for Entigen Core.
//!
//! A single root type wraps domain and application errors, with rich
//! context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Entigen Core operations.
#[derive(Debug, Error, Clone)]
pub enum EngineError {
    /// Errors from the domain layer (validation, binding, rendering).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (store, planning, commit).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl EngineError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in entigen".into(),
                "Please report it with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::error::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::error::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::error::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type EngineResult<T> = Result<T, EngineError>;
