//! Paragraph templates and placeholder substitution.

use crate::error::TemplateSyntaxError;
use serde::{Deserialize, Serialize};
use std::mem;

/// An immutable paragraph source with zero or more `{name}` placeholders.
///
/// Placeholder names are `[A-Za-z0-9_]+`. `{{` and `}}` escape literal
/// braces in template text. Rendering is substitution only; a template
/// carries no conditional logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParagraphTemplate(String);

/// One parsed piece of a template source.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Why [`ParagraphTemplate::render`] gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RenderFailure {
    Syntax(TemplateSyntaxError),
    Unresolved(String),
}

impl ParagraphTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// The raw template text, escapes included.
    pub fn source(&self) -> &str {
        &self.0
    }

    /// Distinct placeholder names in first-appearance order.
    pub fn placeholders(&self) -> Result<Vec<String>, TemplateSyntaxError> {
        let mut names = Vec::new();
        for segment in scan(&self.0)? {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        Ok(names)
    }

    /// Substitutes every placeholder using `resolve`.
    ///
    /// Values are inserted verbatim in a single pass, so braces inside a
    /// resolved value are never re-interpreted as placeholders.
    pub(crate) fn render<'v>(
        &self,
        mut resolve: impl FnMut(&str) -> Option<&'v str>,
    ) -> Result<String, RenderFailure> {
        let segments = scan(&self.0).map_err(RenderFailure::Syntax)?;
        let mut out = String::with_capacity(self.0.len());
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(&text),
                Segment::Placeholder(name) => match resolve(&name) {
                    Some(value) => out.push_str(value),
                    None => return Err(RenderFailure::Unresolved(name)),
                },
            }
        }
        Ok(out)
    }
}

impl From<&str> for ParagraphTemplate {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for ParagraphTemplate {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits a template source into literal and placeholder segments.
fn scan(source: &str) -> Result<Vec<Segment>, TemplateSyntaxError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    literal.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) if is_name_char(c) => name.push(c),
                        Some(found) => {
                            return Err(TemplateSyntaxError::InvalidPlaceholderChar { found })
                        }
                        None => return Err(TemplateSyntaxError::UnterminatedPlaceholder),
                    }
                }
                if name.is_empty() {
                    return Err(TemplateSyntaxError::EmptyPlaceholder);
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(name));
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    literal.push('}');
                } else {
                    return Err(TemplateSyntaxError::UnmatchedBrace);
                }
            }
            c => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_with(template: &str, pairs: &[(&str, &str)]) -> Result<String, RenderFailure> {
        ParagraphTemplate::new(template).render(|name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| *v)
        })
    }

    #[test]
    fn substitutes_in_order() {
        let out = render_with("To {officer} of {station}.", &[
            ("officer", "Insp. Rao"),
            ("station", "Fort"),
        ])
        .unwrap();
        assert_eq!(out, "To Insp. Rao of Fort.");
    }

    #[test]
    fn repeated_placeholder_resolves_each_time() {
        let out = render_with("{name}, the said {name}", &[("name", "Z")]).unwrap();
        assert_eq!(out, "Z, the said Z");
    }

    #[test]
    fn escaped_braces_are_literal() {
        let out = render_with("a {{not-a-placeholder}} b {x}", &[("x", "1")]).unwrap();
        assert_eq!(out, "a {not-a-placeholder} b 1");
    }

    #[test]
    fn braces_in_values_are_not_reinterpreted() {
        let out = render_with("field: {x}", &[("x", "{officerName}")]).unwrap();
        assert_eq!(out, "field: {officerName}");
    }

    #[test]
    fn unresolved_placeholder_is_reported() {
        let err = render_with("{ghost}", &[]).unwrap_err();
        assert_eq!(err, RenderFailure::Unresolved("ghost".to_string()));
    }

    #[test]
    fn placeholders_are_deduplicated_in_order() {
        let template = ParagraphTemplate::new("{b} {a} {b}");
        assert_eq!(template.placeholders().unwrap(), vec!["b", "a"]);
    }

    #[test]
    fn syntax_errors() {
        let cases: [(&str, TemplateSyntaxError); 4] = [
            ("tail {open", TemplateSyntaxError::UnterminatedPlaceholder),
            ("{}", TemplateSyntaxError::EmptyPlaceholder),
            (
                "{bad name}",
                TemplateSyntaxError::InvalidPlaceholderChar { found: ' ' },
            ),
            ("stray }", TemplateSyntaxError::UnmatchedBrace),
        ];
        for (source, expected) in cases {
            let err = ParagraphTemplate::new(source).placeholders().unwrap_err();
            assert_eq!(err, expected, "source: {source:?}");
        }
    }
}
