//! Core error types for diagram conversion
//!
//! Every failure here aborts the whole conversion; callers either get a
//! complete PlantUML document or exactly one of these errors.

use thiserror::Error;

/// Literal content that marks a document as deliberately malformed.
pub const MALFORMED_SENTINEL: &str = "invalid syntax";

/// Core error types for diagram conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Malformed input: document contains the `invalid syntax` marker")]
    MalformedInput,

    #[error("Invalid class member: {line}")]
    InvalidMember { line: String },
}

impl ConvertError {
    /// Create a new invalid member error
    pub fn invalid_member(line: impl Into<String>) -> Self {
        Self::InvalidMember { line: line.into() }
    }

    /// The offending line, when the error points at one
    pub fn line(&self) -> Option<&str> {
        match self {
            Self::InvalidMember { line } => Some(line),
            Self::MalformedInput => None,
        }
    }
}
