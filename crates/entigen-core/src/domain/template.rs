//! Template aggregate: a named text asset with placeholder markers and a
//! target-path pattern.
//!
//! ## Source format
//!
//! A template is a plain-text file. Placeholders are `{{variableName}}`
//! markers; the declared variable set is exactly the distinct markers the
//! template contains. The destination of the generated file comes from an
//! optional first-line directive:
//!
//! ```text
//! @path {{entityName}}.model
//! ```
//!
//! The directive line is stripped from the body. When absent, the pattern
//! defaults to `{{entityName}}.<template name>`.
//!
//! Templates are immutable once parsed and owned by their store.

use std::collections::BTreeSet;

use super::error::DomainError;

/// Prefix of the optional target-path directive on a template's first line.
const PATH_DIRECTIVE: &str = "@path ";

/// An immutable, parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    body: String,
    path_pattern: String,
    variables: BTreeSet<String>,
}

impl Template {
    /// Parse raw template text.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedTemplate` when the body or path
    /// pattern contains an unterminated `{{` marker.
    pub fn parse(name: impl Into<String>, raw: &str) -> Result<Self, DomainError> {
        let name = name.into();

        let (path_pattern, body) = match raw.lines().next() {
            Some(first) if first.starts_with(PATH_DIRECTIVE) => {
                let pattern = first[PATH_DIRECTIVE.len()..].trim().to_string();
                if pattern.is_empty() {
                    return Err(DomainError::MalformedTemplate {
                        name,
                        reason: "@path directive has no pattern".into(),
                    });
                }
                // Strip the directive line (and its line ending, CRLF or
                // LF) from the body.
                let rest = &raw[first.len()..];
                let rest = rest
                    .strip_prefix("\r\n")
                    .or_else(|| rest.strip_prefix('\n'))
                    .unwrap_or("");
                (pattern, rest.to_string())
            }
            _ => (format!("{{{{entityName}}}}.{name}"), raw.to_string()),
        };

        let mut variables = scan_markers(&name, &body)?;
        variables.extend(scan_markers(&name, &path_pattern)?);

        Ok(Self {
            name,
            body,
            path_pattern,
            variables,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template body with the `@path` directive stripped.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Target-path pattern, e.g. `{{entityName}}.model`.
    pub fn path_pattern(&self) -> &str {
        &self.path_pattern
    }

    /// Distinct variables the template declares (body and path pattern).
    pub fn variables(&self) -> &BTreeSet<String> {
        &self.variables
    }
}

/// Collect the distinct `{{marker}}` names in `text`.
///
/// # Errors
///
/// `MalformedTemplate` when a `{{` has no matching `}}`.
pub(crate) fn scan_markers(
    template_name: &str,
    text: &str,
) -> Result<BTreeSet<String>, DomainError> {
    let mut markers = BTreeSet::new();
    let mut rest = text;

    while let Some(open) = rest.find("{{") {
        let after = &rest[open + 2..];
        let close = after.find("}}").ok_or_else(|| DomainError::MalformedTemplate {
            name: template_name.to_string(),
            reason: "unterminated '{{' marker".into(),
        })?;
        markers.insert(after[..close].to_string());
        rest = &after[close + 2..];
    }

    Ok(markers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_body_markers() {
        let t = Template::parse("model", "entity {{entityName}}\n{{fieldDeclarations}}\n").unwrap();
        assert!(t.variables().contains("entityName"));
        assert!(t.variables().contains("fieldDeclarations"));
        assert_eq!(t.variables().len(), 2);
    }

    #[test]
    fn path_directive_is_stripped_and_used() {
        let t = Template::parse("model", "@path src/{{entityNameSnake}}.rs\nbody {{entityName}}\n")
            .unwrap();
        assert_eq!(t.path_pattern(), "src/{{entityNameSnake}}.rs");
        assert_eq!(t.body(), "body {{entityName}}\n");
        // Pattern variables count as declared.
        assert!(t.variables().contains("entityNameSnake"));
    }

    #[test]
    fn crlf_directive_line_is_stripped_cleanly() {
        let t = Template::parse(
            "model",
            "@path {{entityName}}.model\r\nbody {{entityName}}\r\n",
        )
        .unwrap();
        assert_eq!(t.path_pattern(), "{{entityName}}.model");
        assert_eq!(t.body(), "body {{entityName}}\r\n");
    }

    #[test]
    fn default_pattern_uses_template_name() {
        let t = Template::parse("controller", "x").unwrap();
        assert_eq!(t.path_pattern(), "{{entityName}}.controller");
    }

    #[test]
    fn repeated_marker_declared_once() {
        let t = Template::parse("t", "{{a}} {{a}} {{a}}").unwrap();
        assert_eq!(t.variables().len(), 1);
    }

    #[test]
    fn unterminated_marker_is_malformed() {
        let err = Template::parse("bad", "hello {{entityName\n").unwrap_err();
        assert!(matches!(
            err,
            DomainError::MalformedTemplate { ref name, .. } if name == "bad"
        ));
    }

    #[test]
    fn empty_path_directive_is_malformed() {
        assert!(Template::parse("t", "@path   \nbody").is_err());
    }

    #[test]
    fn template_with_no_markers_is_valid() {
        let t = Template::parse("readme", "static content only\n").unwrap();
        // The default path pattern still declares entityName.
        assert_eq!(
            t.variables().iter().collect::<Vec<_>>(),
            vec!["entityName"]
        );
    }
}
