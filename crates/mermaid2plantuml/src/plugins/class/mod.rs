//! Class diagram plugin
//!
//! Parses Mermaid class diagrams and renders them as PlantUML.

mod block;
mod database;
mod member;
mod parser;
mod relationship;
mod renderer;

pub use block::{parse_class_block, BLOCK_CLOSE};
pub use database::{
    ClassDatabase, ClassDefinition, ClassMember, Relationship, RelationshipKind, Stereotype,
    Visibility,
};
pub use member::parse_member;
pub use parser::{ClassParser, CLASS_KEYWORD, DIAGRAM_KEYWORD};
pub use relationship::{
    extract_class_names, is_relationship_line, parse_relationship, RELATION_GLYPHS,
};
pub use renderer::{PlantUmlRenderer, END_MARKER, START_MARKER};
