//! Relationship line grammar
//!
//! Parses top-level lines such as `Animal <|-- Dog`,
//! `Order "1" *-- "0..*" Item` or `Customer --> Order : places`.

use chumsky::prelude::*;
use chumsky::text::ident;

use super::database::{Relationship, RelationshipKind};
use crate::core::chumsky_utils::{inline_whitespace, quoted};

/// Characters that may appear in a relationship operator
pub const RELATION_GLYPHS: &str = "<>-|*o.";

/// Substrings that mark a top-level line as a relationship
const RELATION_MARKERS: [&str; 2] = ["--", ".."];

/// Whether a top-level line carries a relationship operator
pub fn is_relationship_line(line: &str) -> bool {
    RELATION_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Parse one trimmed relationship line.
///
/// Quoted-multiplicity forms are tried before the bare form. The
/// bidirectional production exists so `<-->` always classifies as
/// [`RelationshipKind::Bidirectional`].
pub fn parse_relationship(line: &str) -> Option<Relationship> {
    relationship_parser().parse(line.trim()).into_result().ok()
}

/// Class-name tokens mentioned by a relationship line, in order.
///
/// Tokens holding operator glyphs or quotes are skipped, and a `: label`
/// ends the scan.
pub fn extract_class_names(line: &str) -> Vec<String> {
    line.split_whitespace()
        .take_while(|token| !token.starts_with(':'))
        .filter(|token| {
            !token.contains("--")
                && !token.contains("..")
                && !token.contains(['<', '>', '*', '"'])
        })
        .map(|token| token.to_string())
        .collect()
}

fn relationship_parser<'src>() -> impl Parser<'src, &'src str, Relationship> + Clone {
    let ws = inline_whitespace();

    let class_name = ident().map(|s: &str| s.to_string());

    let operator = one_of(RELATION_GLYPHS)
        .repeated()
        .at_least(1)
        .to_slice()
        .map(|s: &str| s.to_string());

    // Source "m1" <-->  "m2" Target
    let bidirectional = class_name
        .clone()
        .then_ignore(ws.clone())
        .then(quoted())
        .then_ignore(ws.clone())
        .then_ignore(just("<-->"))
        .then_ignore(ws.clone())
        .then(quoted())
        .then_ignore(ws.clone())
        .then(class_name.clone())
        .map(|(((source, source_mult), target_mult), target)| {
            Relationship::new(source, target, "<-->")
                .with_kind(RelationshipKind::Bidirectional)
                .with_multiplicities(source_mult, target_mult)
        });

    // Source "m1" op "m2" Target
    let with_multiplicity = class_name
        .clone()
        .then_ignore(ws.clone())
        .then(quoted())
        .then_ignore(ws.clone())
        .then(operator.clone())
        .then_ignore(ws.clone())
        .then(quoted())
        .then_ignore(ws.clone())
        .then(class_name.clone())
        .map(|((((source, source_mult), operator), target_mult), target)| {
            Relationship::new(source, target, operator)
                .with_multiplicities(source_mult, target_mult)
        });

    // Source op Target
    let bare = class_name
        .clone()
        .then_ignore(ws.clone())
        .then(operator)
        .then_ignore(ws.clone())
        .then(class_name)
        .map(|((source, operator), target)| Relationship::new(source, target, operator));

    // Optional trailing label: ": text"
    let label = just(':')
        .ignore_then(any().repeated().to_slice())
        .map(|s: &str| s.trim().to_string())
        .or_not();

    choice((bidirectional, with_multiplicity, bare))
        .then_ignore(ws)
        .then(label)
        .then_ignore(end())
        .map(|(relationship, label)| match label {
            Some(label) if !label.is_empty() => relationship.with_label(label),
            _ => relationship,
        })
}
