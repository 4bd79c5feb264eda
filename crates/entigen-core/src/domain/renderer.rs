//! Strict single-pass placeholder substitution.
//!
//! Each `{{marker}}` in the input is replaced by its bound value. Expansion
//! is one pass only — a bound value containing `{{…}}` is emitted verbatim,
//! never re-expanded — so output is deterministic and cannot loop.
//!
//! Markers absent from the context are an error rather than pass-through:
//! the binder should have caught them, so hitting one here means template
//! and context disagree (defense in depth, not a user-facing path).

use super::{binder::SubstitutionContext, error::DomainError, template::Template};

/// Pure renderer. Identical (template, context) input always yields
/// byte-identical output.
pub struct Renderer;

impl Renderer {
    /// Render a template body against a bound context.
    ///
    /// # Errors
    ///
    /// `DomainError::UnknownPlaceholder` listing every marker in the body
    /// that the context does not cover.
    pub fn render(template: &Template, ctx: &SubstitutionContext) -> Result<String, DomainError> {
        Self::render_text(template.name(), template.body(), ctx)
    }

    /// Render arbitrary marker-bearing text, e.g. a target-path pattern.
    pub fn render_text(
        template_name: &str,
        text: &str,
        ctx: &SubstitutionContext,
    ) -> Result<String, DomainError> {
        let mut out = String::with_capacity(text.len());
        let mut unknown = Vec::new();
        let mut rest = text;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let close = after.find("}}").ok_or_else(|| DomainError::MalformedTemplate {
                name: template_name.to_string(),
                reason: "unterminated '{{' marker".into(),
            })?;
            let marker = &after[..close];

            match ctx.get(marker) {
                Some(value) => out.push_str(value),
                None => {
                    if !unknown.iter().any(|m| m == marker) {
                        unknown.push(marker.to_string());
                    }
                }
            }

            rest = &after[close + 2..];
        }
        out.push_str(rest);

        if !unknown.is_empty() {
            return Err(DomainError::UnknownPlaceholder {
                template: template_name.to_string(),
                markers: unknown,
            });
        }

        Ok(out)
    }
}
