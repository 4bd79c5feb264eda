//! Model descriptor: the validated description of what to generate.
//!
//! Callers build a [`RawModel`] (unchecked strings, e.g. straight from CLI
//! flags) and pass it through [`ModelDescriptor::validate`]. Validation is
//! total: every violation in the input is reported in one pass.

use std::collections::HashSet;

use serde::Serialize;

use super::error::{DomainError, ModelViolation};

/// Type tag a field may carry.
///
/// The recognized set is fixed; anything else in the raw input is an
/// `UnknownTypeTag` violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    Reference,
}

impl FieldType {
    pub const ALL: [FieldType; 6] = [
        Self::String,
        Self::Integer,
        Self::Float,
        Self::Boolean,
        Self::Date,
        Self::Reference,
    ];

    /// Parse a type tag (case-insensitive). `None` for unrecognized tags.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "float" => Some(Self::Float),
            "boolean" => Some(Self::Boolean),
            "date" => Some(Self::Date),
            "reference" => Some(Self::Reference),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Reference => "reference",
        }
    }

    /// Literal default value emitted by the `fieldDefaults` binding.
    pub fn default_value(&self) -> &'static str {
        match self {
            Self::String => "\"\"",
            Self::Integer => "0",
            Self::Float => "0.0",
            Self::Boolean => "false",
            Self::Date => "1970-01-01",
            Self::Reference => "null",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated field: unique name, recognized type, free-form modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    pub modifiers: Vec<String>,
}

/// Unchecked model input, as assembled by the caller.
#[derive(Debug, Clone, Default)]
pub struct RawModel {
    pub entity_name: String,
    pub fields: Vec<RawField>,
}

/// One unchecked field entry.
#[derive(Debug, Clone)]
pub struct RawField {
    pub name: String,
    pub type_tag: String,
    pub modifiers: Vec<String>,
}

impl RawModel {
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            fields: Vec::new(),
        }
    }

    /// Fluent field addition for tests and programmatic callers.
    pub fn field(mut self, name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        self.fields.push(RawField {
            name: name.into(),
            type_tag: type_tag.into(),
            modifiers: Vec::new(),
        });
        self
    }
}

/// Validated, read-only description of the entity to generate.
///
/// Invariants (enforced by [`validate`](Self::validate)):
/// 1. Entity name is non-empty and identifier-safe.
/// 2. Field names are non-empty, identifier-safe, and unique.
/// 3. Every type tag is in the recognized set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    entity_name: String,
    fields: Vec<Field>,
}

impl ModelDescriptor {
    /// Validate a raw model, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidModel` carrying one `ModelViolation` per
    /// independent problem — for N problems the caller sees exactly N.
    pub fn validate(raw: RawModel) -> Result<Self, DomainError> {
        let mut violations = Vec::new();

        if raw.entity_name.is_empty() {
            violations.push(ModelViolation::EmptyEntityName);
        } else if !is_identifier_safe(&raw.entity_name) {
            violations.push(ModelViolation::EntityNameNotIdentifier {
                name: raw.entity_name.clone(),
            });
        }

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(raw.fields.len());

        for (index, field) in raw.fields.iter().enumerate() {
            if field.name.is_empty() {
                violations.push(ModelViolation::EmptyFieldName { index });
            } else {
                if !is_identifier_safe(&field.name) {
                    violations.push(ModelViolation::FieldNameNotIdentifier {
                        name: field.name.clone(),
                    });
                }
                if !seen.insert(field.name.clone()) {
                    violations.push(ModelViolation::DuplicateFieldName {
                        name: field.name.clone(),
                    });
                }
            }

            match FieldType::parse(&field.type_tag) {
                Some(ty) => fields.push(Field {
                    name: field.name.clone(),
                    ty,
                    modifiers: field.modifiers.clone(),
                }),
                None => violations.push(ModelViolation::UnknownTypeTag {
                    field: field.name.clone(),
                    tag: field.type_tag.clone(),
                }),
            }
        }

        if !violations.is_empty() {
            return Err(DomainError::InvalidModel { violations });
        }

        Ok(Self {
            entity_name: raw.entity_name,
            fields,
        })
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// ASCII identifier check: leading alphabetic or `_`, rest alphanumeric or `_`.
fn is_identifier_safe(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
