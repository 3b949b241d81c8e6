//! Template - placeholder substitution over prompt content
//!
//! Parsing never fails: malformed tokens degrade to literal text. A
//! parsed template answers two questions from the same scan - which
//! variables the content requires, and what it renders to against a
//! set of bindings.

mod parser;

use std::collections::{BTreeSet, HashMap};

use crate::domain::errors::DomainError;

pub use parser::TemplatePart;

/// Parsed prompt content, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    parts: Vec<TemplatePart>,
}

impl Template {
    /// Scan content into literal and variable parts
    pub fn parse(content: &str) -> Self {
        let parts = match parser::parse_parts(content) {
            Ok((_, scanned)) => merge_literals(scanned),
            // The scanner accepts any input; treat a failure as fully literal.
            Err(_) => vec![TemplatePart::Literal(content.to_string())],
        };
        Self { parts }
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// Names of all placeholders, in lexicographic order
    pub fn variable_names(&self) -> BTreeSet<String> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                TemplatePart::Variable(name) => Some(name.clone()),
                TemplatePart::Literal(_) => None,
            })
            .collect()
    }

    /// Substitute every placeholder; fails on the first variable
    /// missing from `variables`, in scan order
    pub fn render(&self, variables: &HashMap<String, String>) -> Result<String, DomainError> {
        let mut result = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => result.push_str(text),
                TemplatePart::Variable(name) => match variables.get(name) {
                    Some(value) => result.push_str(value),
                    None => return Err(DomainError::MissingVariable(name.clone())),
                },
            }
        }
        Ok(result)
    }
}

// The scanner emits single-character literals while resynchronizing;
// collapse runs so parts stay canonical.
fn merge_literals(scanned: Vec<TemplatePart>) -> Vec<TemplatePart> {
    let mut parts: Vec<TemplatePart> = Vec::with_capacity(scanned.len());
    for part in scanned {
        if let (Some(TemplatePart::Literal(prev)), TemplatePart::Literal(next)) =
            (parts.last_mut(), &part)
        {
            prev.push_str(next);
            continue;
        }
        parts.push(part);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_substitutes_all_placeholders() {
        let template = Template::parse("Hello {{name}}, your {{item}} is ready");
        let rendered = template
            .render(&vars(&[("name", "Ana"), ("item", "order")]))
            .unwrap();
        assert_eq!(rendered, "Hello Ana, your order is ready");
    }

    #[test]
    fn test_render_fails_on_first_missing_variable() {
        let template = Template::parse("Hello {{name}}, your {{item}} is ready");
        let err = template.render(&vars(&[("name", "Ana")])).unwrap_err();
        assert!(matches!(err, DomainError::MissingVariable(name) if name == "item"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let template = Template::parse("{{a}} and {{b}}");
        let bindings = vars(&[("a", "1"), ("b", "2")]);
        let first = template.render(&bindings).unwrap();
        let second = template.render(&bindings).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extra_variables_are_ignored() {
        let template = Template::parse("Hi {{name}}");
        let rendered = template
            .render(&vars(&[("name", "Bo"), ("unused", "x")]))
            .unwrap();
        assert_eq!(rendered, "Hi Bo");
    }

    #[test]
    fn test_malformed_tokens_pass_through_verbatim() {
        let content = "{{}} { not } {{bad name}} {{name}}";
        let template = Template::parse(content);
        let rendered = template.render(&vars(&[("name", "ok")])).unwrap();
        assert_eq!(rendered, "{{}} { not } {{bad name}} ok");
    }

    #[test]
    fn test_content_without_placeholders_needs_no_variables() {
        let template = Template::parse("static text");
        assert!(template.variable_names().is_empty());
        assert_eq!(template.render(&HashMap::new()).unwrap(), "static text");
    }

    #[test]
    fn test_variable_names_deduplicate() {
        let template = Template::parse("{{b}} {{a}} {{b}}");
        let names: Vec<String> = template.variable_names().into_iter().collect();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_repeated_placeholder_renders_each_occurrence() {
        let template = Template::parse("{{x}}-{{x}}");
        assert_eq!(template.render(&vars(&[("x", "7")])).unwrap(), "7-7");
    }
}
