//! Placeholder scanner for prompt content.
//!
//! A placeholder is exactly `{{name}}` where `name` matches
//! `[A-Za-z_][A-Za-z0-9_]*`. Anything else - unmatched braces, `{{}}`,
//! invalid name characters - is literal text and passes through
//! verbatim. After a brace run that does not open a well-formed
//! placeholder the scanner advances a single character, so the
//! leftmost well-formed token always wins.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1, take_while, take_while_m_n};
use nom::combinator::{all_consuming, map, recognize};
use nom::multi::many0;
use nom::sequence::{delimited, pair};
use nom::IResult;

/// One segment of parsed prompt content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Literal(String),
    Variable(String),
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while_m_n(1, 1, |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

fn placeholder(input: &str) -> IResult<&str, &str> {
    delimited(tag("{{"), identifier, tag("}}"))(input)
}

fn literal_run(input: &str) -> IResult<&str, &str> {
    take_till1(|c| c == '{')(input)
}

// A '{' that did not open a placeholder stays literal; consuming one
// character resynchronizes the scan.
fn stray_brace(input: &str) -> IResult<&str, &str> {
    tag("{")(input)
}

fn part(input: &str) -> IResult<&str, TemplatePart> {
    alt((
        map(placeholder, |name| TemplatePart::Variable(name.to_string())),
        map(literal_run, |text| TemplatePart::Literal(text.to_string())),
        map(stray_brace, |text: &str| {
            TemplatePart::Literal(text.to_string())
        }),
    ))(input)
}

pub fn parse_parts(input: &str) -> IResult<&str, Vec<TemplatePart>> {
    all_consuming(many0(part))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(input: &str) -> Vec<TemplatePart> {
        let (rest, parts) = parse_parts(input).expect("scan must not fail");
        assert!(rest.is_empty());
        parts
    }

    #[test]
    fn test_plain_text_is_one_literal() {
        assert_eq!(
            parts("no placeholders here"),
            vec![TemplatePart::Literal("no placeholders here".to_string())]
        );
    }

    #[test]
    fn test_placeholder_between_literals() {
        assert_eq!(
            parts("Hello {{name}}!"),
            vec![
                TemplatePart::Literal("Hello ".to_string()),
                TemplatePart::Variable("name".to_string()),
                TemplatePart::Literal("!".to_string()),
            ]
        );
    }

    #[test]
    fn test_consecutive_placeholders() {
        assert_eq!(
            parts("{{a}}{{b}}"),
            vec![
                TemplatePart::Variable("a".to_string()),
                TemplatePart::Variable("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_underscore_and_digits_in_name() {
        assert_eq!(
            parts("{{_var_1}}"),
            vec![TemplatePart::Variable("_var_1".to_string())]
        );
    }

    #[test]
    fn test_name_must_not_start_with_digit() {
        let scanned = parts("{{1abc}}");
        assert!(scanned
            .iter()
            .all(|p| matches!(p, TemplatePart::Literal(_))));
    }

    #[test]
    fn test_empty_braces_are_literal() {
        let scanned = parts("{{}}");
        assert!(scanned
            .iter()
            .all(|p| matches!(p, TemplatePart::Literal(_))));
        let joined: String = scanned
            .iter()
            .map(|p| match p {
                TemplatePart::Literal(s) => s.as_str(),
                TemplatePart::Variable(_) => unreachable!(),
            })
            .collect();
        assert_eq!(joined, "{{}}");
    }

    #[test]
    fn test_whitespace_inside_braces_is_literal() {
        let scanned = parts("{{ name }}");
        assert!(scanned
            .iter()
            .all(|p| matches!(p, TemplatePart::Literal(_))));
    }

    #[test]
    fn test_unclosed_placeholder_is_literal() {
        let scanned = parts("Hello {{name");
        assert!(scanned
            .iter()
            .all(|p| matches!(p, TemplatePart::Literal(_))));
    }

    #[test]
    fn test_single_braces_are_literal() {
        assert_eq!(
            parts("{name}"),
            vec![
                TemplatePart::Literal("{".to_string()),
                TemplatePart::Literal("name}".to_string()),
            ]
        );
    }

    #[test]
    fn test_leftmost_well_formed_token_wins() {
        // The outer braces fail to open a token; the scan resyncs one
        // character in and finds {{name}}.
        assert_eq!(
            parts("{{{name}}}"),
            vec![
                TemplatePart::Literal("{".to_string()),
                TemplatePart::Variable("name".to_string()),
                TemplatePart::Literal("}".to_string()),
            ]
        );
    }
}
