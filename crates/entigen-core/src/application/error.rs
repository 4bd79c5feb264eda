//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The template directory is missing or a template file cannot be read
    /// or parsed.
    #[error("failed to load templates from {path}: {reason}")]
    TemplateLoad { path: PathBuf, reason: String },

    /// No template with the requested name exists in the store.
    #[error("template not found: '{name}'")]
    TemplateNotFound { name: String },

    /// The commit phase failed part-way. `written` is the exact list of
    /// paths this invocation managed to write before the failure.
    #[error("commit failed at {path}: {reason} ({} file(s) already written)", written.len())]
    CommitFailure {
        path: PathBuf,
        reason: String,
        written: Vec<PathBuf>,
    },

    /// Filesystem operation failed outside the commit phase.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateLoad { path, reason } => vec![
                format!("Could not load templates from: {}", path.display()),
                format!("Details: {reason}"),
                "Check the directory exists and every *.tpl file is well-formed".into(),
            ],
            Self::TemplateNotFound { name } => vec![
                format!("No template named '{name}'"),
                "Try: entigen list to see available templates".into(),
            ],
            Self::CommitFailure { written, .. } => {
                let mut out = vec![
                    "Generation stopped during the write phase".into(),
                    "Files written before the failure:".into(),
                ];
                out.extend(written.iter().map(|p| format!("  • {}", p.display())));
                out.push("Inspect them and re-run, or remove them to roll back".into());
                out
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateLoad { .. } => ErrorCategory::Configuration,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::CommitFailure { .. } | Self::FilesystemError { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
