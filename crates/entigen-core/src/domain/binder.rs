//! Binder: deterministic derivation of template variables from a model.
//!
//! For every variable a template declares, the binder either derives a value
//! from the [`ModelDescriptor`] or records it as unbound. Unbound variables
//! are collected and reported together, matching the all-violations policy
//! of model validation.
//!
//! ## Derivable variables
//!
//! | Variable            | Derivation                                   |
//! |---------------------|----------------------------------------------|
//! | `entityName`        | entity name as given                         |
//! | `entityNameSnake`   | snake_case                                   |
//! | `entityNamePascal`  | PascalCase                                   |
//! | `entityNameKebab`   | kebab-case                                   |
//! | `entityNameLower`   | lowercase                                    |
//! | `tableName`         | snake_case + `s`                             |
//! | `fieldNames`        | names joined with `", "`                     |
//! | `fieldDeclarations` | one `name: type` line per field              |
//! | `fieldDefaults`     | one `name = <default>` line per field        |
//! | `fieldCount`        | number of fields                             |

use std::collections::BTreeMap;

use super::{error::DomainError, model::ModelDescriptor, template::Template};

/// Mapping from variable name to rendered value.
///
/// Created per (template, model) pair; consumed by the renderer and
/// discarded. `BTreeMap` keeps iteration deterministic for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionContext {
    values: BTreeMap<String, String>,
}

impl SubstitutionContext {
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.values.get(variable).map(String::as_str)
    }

    pub fn insert(&mut self, variable: impl Into<String>, value: impl Into<String>) {
        self.values.insert(variable.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Stateless variable derivation.
pub struct Binder;

impl Binder {
    /// Bind a template's declared variables against a model.
    ///
    /// # Errors
    ///
    /// `DomainError::UnboundVariable` listing every variable that cannot be
    /// derived — collected, not first-one-wins. Neither input is mutated.
    pub fn bind(template: &Template, model: &ModelDescriptor) -> Result<SubstitutionContext, DomainError> {
        let mut ctx = SubstitutionContext::default();
        let mut unbound = Vec::new();

        for variable in template.variables() {
            match derive(variable, model) {
                Some(value) => ctx.insert(variable.clone(), value),
                None => unbound.push(variable.clone()),
            }
        }

        if !unbound.is_empty() {
            return Err(DomainError::UnboundVariable {
                template: template.name().to_string(),
                variables: unbound,
            });
        }

        Ok(ctx)
    }

    /// Context holding only the entity-name derivations.
    ///
    /// Used by the output planner to resolve target-path patterns, which may
    /// reference name casings but never field-level variables.
    pub fn entity_context(model: &ModelDescriptor) -> SubstitutionContext {
        let mut ctx = SubstitutionContext::default();
        for variable in [
            "entityName",
            "entityNameSnake",
            "entityNamePascal",
            "entityNameKebab",
            "entityNameLower",
            "tableName",
        ] {
            if let Some(value) = derive(variable, model) {
                ctx.insert(variable, value);
            }
        }
        ctx
    }
}

/// Derive one variable's value, or `None` if it is not derivable.
fn derive(variable: &str, model: &ModelDescriptor) -> Option<String> {
    let name = model.entity_name();
    match variable {
        "entityName" => Some(name.to_string()),
        "entityNameSnake" => Some(to_snake_case(name)),
        "entityNamePascal" => Some(to_pascal_case(name)),
        "entityNameKebab" => Some(to_kebab_case(name)),
        "entityNameLower" => Some(name.to_lowercase()),
        "tableName" => Some(format!("{}s", to_snake_case(name))),
        "fieldNames" => Some(
            model
                .fields()
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        "fieldDeclarations" => Some(
            model
                .fields()
                .iter()
                .map(|f| format!("{}: {}", f.name, f.ty))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        "fieldDefaults" => Some(
            model
                .fields()
                .iter()
                .map(|f| format!("{} = {}", f.name, f.ty.default_value()))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        "fieldCount" => Some(model.fields().len().to_string()),
        _ => None,
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split a string into lowercase words.
///
/// Boundaries: explicit separators (`_`, `-`, whitespace), camelCase
/// transitions (`aB`), and acronym edges (`HTTPRequest` → `http`,
/// `request`, detected by the Upper-Upper-Lower pattern).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
