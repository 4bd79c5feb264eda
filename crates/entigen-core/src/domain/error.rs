use thiserror::Error;

/// Root domain error type.
///
/// Validation-stage errors are collected, not first-one-wins: a model with
/// three violations produces one `InvalidModel` carrying all three, so the
/// caller never has to fix-and-retry one field at a time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid model: {} violation(s)", violations.len())]
    InvalidModel { violations: Vec<ModelViolation> },

    #[error("template '{template}' declares variable(s) not derivable from the model: {}", variables.join(", "))]
    UnboundVariable {
        template: String,
        variables: Vec<String>,
    },

    #[error("template '{template}' references marker(s) absent from the context: {}", markers.join(", "))]
    UnknownPlaceholder {
        template: String,
        markers: Vec<String>,
    },

    #[error("malformed template '{name}': {reason}")]
    MalformedTemplate { name: String, reason: String },
}

/// One independent problem found while validating a raw model.
///
/// `ModelDescriptor::validate` reports exactly one of these per violation;
/// N problems in the input yield N entries, never a single summary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelViolation {
    #[error("entity name is empty")]
    EmptyEntityName,

    #[error("entity name '{name}' is not identifier-safe")]
    EntityNameNotIdentifier { name: String },

    #[error("field #{index} has an empty name")]
    EmptyFieldName { index: usize },

    #[error("field name '{name}' is not identifier-safe")]
    FieldNameNotIdentifier { name: String },

    #[error("field name '{name}' is duplicated")]
    DuplicateFieldName { name: String },

    #[error("field '{field}' has unrecognized type tag '{tag}'")]
    UnknownTypeTag { field: String, tag: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidModel { violations } => {
                let mut out = vec!["The entity description is invalid:".into()];
                out.extend(violations.iter().map(|v| format!("  • {v}")));
                out.push("Recognized types: string, integer, float, boolean, date, reference".into());
                out
            }
            Self::UnboundVariable {
                template,
                variables,
            } => vec![
                format!("Template '{template}' needs values the model cannot provide:"),
                format!("  {}", variables.join(", ")),
                "Either remove the placeholders from the template or extend the model".into(),
            ],
            Self::UnknownPlaceholder { template, .. } => vec![
                format!("Template '{template}' body and its declared variables disagree"),
                "Re-run after fixing the template file".into(),
            ],
            Self::MalformedTemplate { name, .. } => vec![
                format!("Template '{name}' could not be parsed"),
                "Check for an unterminated '{{' marker".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidModel { .. } | Self::UnboundVariable { .. } => ErrorCategory::Validation,
            Self::UnknownPlaceholder { .. } | Self::MalformedTemplate { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
