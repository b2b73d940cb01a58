//! Class diagram parser
//!
//! Scans a Mermaid class diagram line by line: class blocks go to the block
//! parser, relationship lines are kept verbatim in encounter order, and
//! everything else is ignored.

use anyhow::Result;
use tracing::{debug, info, span, trace, warn, Level};

use super::block::{parse_class_block, BLOCK_CLOSE};
use super::database::ClassDatabase;
use super::relationship::{extract_class_names, is_relationship_line, parse_relationship};
use crate::core::chumsky_utils::is_mermaid_comment;
use crate::core::{ConvertError, Parser, MALFORMED_SENTINEL};

/// Header line of a Mermaid class diagram
pub const DIAGRAM_KEYWORD: &str = "classDiagram";

/// Keyword that opens a class block
pub const CLASS_KEYWORD: &str = "class";

/// Class diagram parser
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassParser;

impl ClassParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a whole document into `database`.
    ///
    /// The document is parsed into a scratch database first, so `database`
    /// is left untouched when an error is returned.
    pub fn parse_document(
        &self,
        input: &str,
        database: &mut ClassDatabase,
    ) -> Result<(), ConvertError> {
        let parse_span = span!(Level::INFO, "parse_class_diagram", input_len = input.len());
        let _enter = parse_span.enter();

        if input.contains(MALFORMED_SENTINEL) {
            warn!("Input carries the malformed-content marker");
            return Err(ConvertError::MalformedInput);
        }

        let lines = split_lines(input);
        debug!(line_count = lines.len(), "Split input into lines");

        let mut parsed = ClassDatabase::new();
        let mut index = 0;
        while index < lines.len() {
            let line = lines[index];

            if line == DIAGRAM_KEYWORD || is_mermaid_comment(line) {
                index += 1;
                continue;
            }

            if let Some(name) = class_block_name(line) {
                let (close, definition) = parse_class_block(&lines, index + 1)?;
                if close == lines.len() {
                    warn!(class = name, "Dropping class block with no closing brace");
                    break;
                }
                debug!(
                    class = name,
                    members = definition.members.len(),
                    is_enum = definition.is_enum,
                    "Parsed class block"
                );
                parsed.add_class(name, definition);
                index = close + 1;
                continue;
            }

            if is_relationship_line(line) {
                let relationship = parse_relationship(line);
                let class_names = match &relationship {
                    Some(rel) => vec![rel.source.clone(), rel.target.clone()],
                    None => {
                        debug!(line, "Keeping unstructured relationship line verbatim");
                        extract_class_names(line)
                    }
                };
                parsed.add_relation_line(line, relationship, class_names);
            } else {
                trace!(line, "Ignoring line");
            }
            index += 1;
        }

        info!(
            classes = parsed.class_count(),
            relationships = parsed.relationship_count(),
            "Parsed class diagram"
        );
        database.extend(parsed);
        Ok(())
    }
}

impl Parser<ClassDatabase> for ClassParser {
    fn parse(&self, input: &str, database: &mut ClassDatabase) -> Result<()> {
        self.parse_document(input, database)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "class"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        let trimmed = input.trim_start();
        trimmed.starts_with(DIAGRAM_KEYWORD)
            || input.lines().any(|line| class_block_name(line.trim()).is_some())
    }
}

/// Name of the class opened by a `class Name {` line.
fn class_block_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(CLASS_KEYWORD)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let (name, _) = rest.split_once('{')?;
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}

/// Trimmed, non-blank lines. A block opener with content after its brace,
/// such as `class A { +x: int }`, is split into opener, body and `}`.
fn split_lines(input: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let brace = match (class_block_name(line), line.find('{')) {
            (Some(_), Some(brace)) => brace,
            _ => {
                lines.push(line);
                continue;
            }
        };

        lines.push(&line[..=brace]);
        let rest = line[brace + 1..].trim();
        match rest.strip_suffix(BLOCK_CLOSE) {
            Some(body) => {
                let body = body.trim();
                if !body.is_empty() {
                    lines.push(body);
                }
                lines.push(BLOCK_CLOSE);
            }
            None if !rest.is_empty() => lines.push(rest),
            None => {}
        }
    }
    lines
}
