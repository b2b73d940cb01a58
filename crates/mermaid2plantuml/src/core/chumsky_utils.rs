//! Shared chumsky parser utilities for single-line diagram grammars
//!
//! Member and relationship lines are parsed one at a time, so none of these
//! combinators consume newlines.

use chumsky::prelude::*;

/// Parse optional inline whitespace (spaces and tabs, no newlines).
pub fn inline_whitespace<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t").repeated().ignored()
}

/// Parse required inline whitespace (at least one space or tab).
pub fn inline_whitespace_required<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t").repeated().at_least(1).ignored()
}

/// Parse a double-quoted, non-empty string and return its contents.
///
/// Used for relationship multiplicities such as `"0..*"`.
pub fn quoted<'src>() -> impl Parser<'src, &'src str, String> + Clone {
    none_of("\"")
        .repeated()
        .at_least(1)
        .to_slice()
        .delimited_by(just('"'), just('"'))
        .map(|s: &str| s.to_string())
}

/// Whether a trimmed line is a Mermaid comment (`%%` to end of line).
pub fn is_mermaid_comment(line: &str) -> bool {
    line.starts_with("%%")
}
