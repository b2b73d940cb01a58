//! Class block body parsing
//!
//! Consumes the lines between `class Name {` and its closing `}`.

use tracing::{trace, warn};

use super::database::{ClassDefinition, Stereotype};
use super::member::parse_member;
use crate::core::chumsky_utils::is_mermaid_comment;
use crate::core::ConvertError;

/// Closing marker of a class block
pub const BLOCK_CLOSE: &str = "}";

/// How body lines are interpreted; local to one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockMode {
    Members,
    Enumeration,
}

/// Parse a class body starting at `start` (the line after the opener).
///
/// Returns the index of the closing `}` line and the finished definition.
/// A body that runs to the end of `lines` without a closing brace returns
/// `lines.len()` as its index; callers treat that block as unterminated.
///
/// # Errors
///
/// [`ConvertError::InvalidMember`] for a line that is neither a stereotype
/// nor a member while the block is not an enumeration.
pub fn parse_class_block<S: AsRef<str>>(
    lines: &[S],
    start: usize,
) -> Result<(usize, ClassDefinition), ConvertError> {
    let mut definition = ClassDefinition::new();
    let mut mode = BlockMode::Members;

    for (index, raw) in lines.iter().enumerate().skip(start) {
        let line = raw.as_ref().trim();

        if line == BLOCK_CLOSE {
            trace!(index, members = definition.members.len(), "Closed class block");
            return Ok((index, definition));
        }

        if line.is_empty() || is_mermaid_comment(line) {
            continue;
        }

        if let Some(stereotype) = Stereotype::from_line(line) {
            trace!(?stereotype, "Stereotype");
            definition.add_stereotype(stereotype, line);
            if stereotype == Stereotype::Enumeration {
                mode = BlockMode::Enumeration;
            }
            continue;
        }

        match mode {
            BlockMode::Enumeration => {
                trace!(value = line, "Enumeration value");
                definition.add_enum_value(line);
            }
            BlockMode::Members => match parse_member(line) {
                Some(member) => {
                    trace!(%member, "Member");
                    definition.add_member(&member);
                }
                None => return Err(ConvertError::invalid_member(line)),
            },
        }
    }

    warn!(start, "Class block has no closing brace");
    Ok((lines.len(), definition))
}
