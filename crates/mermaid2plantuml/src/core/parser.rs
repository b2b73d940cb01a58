//! Core parser trait for diagram markup
//!
//! This trait defines the interface for parsing diagram markup language
//! into structured data held in a diagram-specific database.

use anyhow::Result;

/// Core trait for diagram parsers
///
/// Parsers hold no per-document state; every call to [`Parser::parse`]
/// works only on the database it is given, so one parser can serve many
/// threads at once.
///
/// # Example
/// ```
/// use mermaid2plantuml::core::Parser;
/// use mermaid2plantuml::plugins::class::{ClassDatabase, ClassParser};
///
/// let parser = ClassParser::new();
/// let mut db = ClassDatabase::new();
/// parser.parse("classDiagram\n    Animal <|-- Dog", &mut db).unwrap();
/// assert_eq!(db.relationship_count(), 1);
/// ```
pub trait Parser<D>: Send + Sync {
    /// Parse diagram markup into the provided database
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input can be parsed by this parser
    fn can_parse(&self, input: &str) -> bool;
}
