//! nom parsers for the parameter document: a top-level YAML mapping, written either in
//! block style (`key: value` per line) or as a single flow mapping (`{key: value, ...}`).
use std::collections::HashMap;

use itertools::Itertools;
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0, space0},
    combinator::{all_consuming, rest},
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, separated_pair},
    IResult, Parser,
};

use crate::cosmo_errors::CosmoError;

/// Raw key → value text, before any numeric interpretation.
pub(in crate::parameters) type RawEntries = HashMap<String, String>;

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

fn parse_quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        delimited(char('\''), take_while(|c: char| c != '\''), char('\'')),
    ))
    .parse(input)
}

fn parse_key(input: &str) -> IResult<&str, &str> {
    alt((parse_quoted, take_while1(is_key_char))).parse(input)
}

fn parse_entry(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(parse_key, (space0, char(':'), space0), rest).parse(input)
}

fn parse_flow_value(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != ',' && c != '}').parse(input)
}

fn parse_flow_entry(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        parse_key,
        (multispace0, char(':'), multispace0),
        parse_flow_value,
    )
    .parse(input)
}

fn parse_flow_mapping(input: &str) -> IResult<&str, Vec<(&str, &str)>> {
    delimited(
        (char('{'), multispace0),
        separated_list0((multispace0, char(','), multispace0), parse_flow_entry),
        (multispace0, char('}')),
    )
    .parse(input)
}

/// Parse a numeric value; the whole text must be consumed.
pub(in crate::parameters) fn parse_number(input: &str) -> IResult<&str, f64> {
    all_consuming(double).parse(input)
}

/// Remove a `#` comment: either the whole line, or a `#` preceded by whitespace.
fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    line.char_indices()
        .find(|&(i, c)| c == '#' && line[..i].ends_with(char::is_whitespace))
        .map_or(line, |(i, _)| &line[..i])
}

fn is_document_marker(line: &str) -> bool {
    line == "---" || line == "..."
}

fn parse_flow_document(document: &str) -> Result<RawEntries, CosmoError> {
    let (_, pairs) = all_consuming(delimited(multispace0, parse_flow_mapping, multispace0))
        .parse(document)
        .map_err(|_e| CosmoError::NomParsingError(document.to_string()))?;

    Ok(pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.trim().to_string()))
        .collect())
}

/// Collect the entries of the top-level mapping. Later duplicates win.
///
/// Indented lines belong to a nested mapping and are rejected, so that nested keys are
/// never mistaken for top-level ones.
pub(in crate::parameters) fn parse_document(document: &str) -> Result<RawEntries, CosmoError> {
    let lines = document
        .lines()
        .map(|line| strip_comment(line).trim_end())
        .filter(|line| !line.is_empty() && !is_document_marker(line))
        .collect_vec();

    if lines
        .first()
        .is_some_and(|line| line.trim_start().starts_with('{'))
    {
        return parse_flow_document(&lines.join(" "));
    }

    let mut entries = RawEntries::new();
    for line in lines {
        if line.starts_with(char::is_whitespace) {
            return Err(CosmoError::NomParsingError(line.to_string()));
        }

        let (_, (key, value)) =
            parse_entry(line).map_err(|_e| CosmoError::NomParsingError(line.to_string()))?;
        entries.insert(key.to_string(), value.trim().to_string());
    }

    Ok(entries)
}

#[cfg(test)]
mod parser_test {
    use super::*;

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("h: 0.7"), Ok(("", ("h", "0.7"))));
        assert_eq!(parse_entry("omega_m :0.3"), Ok(("", ("omega_m", "0.3"))));
        assert_eq!(parse_entry("\"h\": 0.7"), Ok(("", ("h", "0.7"))));
        assert_eq!(parse_entry("'omega_m': 0.3"), Ok(("", ("omega_m", "0.3"))));
        assert!(parse_entry(": 0.3").is_err());
        assert!(parse_entry("h 0.7").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("0.7").map(|(_, v)| v), Ok(0.7));
        assert_eq!(parse_number("3e-1").map(|(_, v)| v), Ok(0.3));
        assert_eq!(parse_number("1").map(|(_, v)| v), Ok(1.0));
        assert!(parse_number("0.7abc").is_err());
        assert!(parse_number("seventy").is_err());
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("# header"), "");
        assert_eq!(strip_comment("h: 0.7 # Hubble"), "h: 0.7 ");
        assert_eq!(strip_comment("name: sn#1"), "name: sn#1");
    }

    #[test]
    fn test_parse_document() {
        let document = "---\n# cosmology\nh: 0.7\n\nomega_m: 0.3  # matter\nh: 0.68\n...\n";
        let entries = parse_document(document).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries["h"], "0.68");
        assert_eq!(entries["omega_m"], "0.3");
    }

    #[test]
    fn test_parse_document_rejects_malformed_line() {
        let err = parse_document("h: 0.7\nnot a mapping\n").unwrap_err();
        assert_eq!(err, CosmoError::NomParsingError("not a mapping".to_string()));
    }

    #[test]
    fn test_parse_document_quoted_keys() {
        let entries = parse_document("\"h\": 0.7\n'omega_m': 0.3\n").unwrap();

        assert_eq!(entries["h"], "0.7");
        assert_eq!(entries["omega_m"], "0.3");
    }

    #[test]
    fn test_parse_document_flow_mapping() {
        let entries = parse_document("{h: 0.7, omega_m: 0.3}").unwrap();
        assert_eq!(entries["h"], "0.7");
        assert_eq!(entries["omega_m"], "0.3");

        let document = "# cosmology\n{\n  \"h\": 0.7,\n  'omega_m' : 0.3 \n}\n";
        let entries = parse_document(document).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["h"], "0.7");
        assert_eq!(entries["omega_m"], "0.3");
    }

    #[test]
    fn test_parse_document_rejects_unterminated_flow_mapping() {
        assert!(matches!(
            parse_document("{h: 0.7, omega_m: 0.3"),
            Err(CosmoError::NomParsingError(_))
        ));
    }

    #[test]
    fn test_parse_document_rejects_nested_mapping() {
        let err = parse_document("cosmology:\n  h: 0.7\n  omega_m: 0.3\n").unwrap_err();
        assert_eq!(err, CosmoError::NomParsingError("  h: 0.7".to_string()));
    }
}
