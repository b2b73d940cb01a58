//! mermaid2plantuml - Convert Mermaid class diagrams to PlantUML
//!
//! A library for parsing Mermaid.js class diagram syntax and rendering it as
//! PlantUML text, ready for the `plantuml` tool.
//!
//! # Quick Start
//!
//! ```rust
//! use mermaid2plantuml::convert;
//!
//! let input = "classDiagram\n    class Order {\n        +String orderId\n    }";
//! let puml = convert(input).unwrap();
//! assert_eq!(puml, "@startuml\nclass Order {\n    +orderId: String\n}\n@enduml");
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use mermaid2plantuml::prelude::*;
//!
//! let input = "classDiagram\n    Animal <|-- Dog\n    class Dog {\n        +bark()\n    }";
//!
//! // Parse into a database
//! let parser = ClassParser::new();
//! let mut database = ClassDatabase::new();
//! parser.parse(input, &mut database).unwrap();
//!
//! // Access the parsed data
//! assert_eq!(database.class_count(), 1);
//! assert_eq!(database.relationships()[0].kind, RelationshipKind::Inheritance);
//! assert!(database.is_known("Animal"));
//!
//! // Render to PlantUML
//! let renderer = PlantUmlRenderer::new();
//! let puml = renderer.render(&database).unwrap();
//! assert!(puml.starts_with("@startuml\nAnimal <|-- Dog\n"));
//! ```

pub mod core;
pub mod plugins;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{ConvertError, Parser, Renderer};
    pub use crate::plugins::class::{
        ClassDatabase, ClassDefinition, ClassMember, ClassParser, PlantUmlRenderer,
        Relationship, RelationshipKind, Stereotype, Visibility,
    };
}

use crate::plugins::class::{ClassDatabase, ClassParser, PlantUmlRenderer};

/// Convert a Mermaid class diagram to PlantUML text
///
/// This is the simplest way to run a conversion. The result always starts
/// with `@startuml` and ends with `@enduml` (no trailing newline).
///
/// # Errors
/// * [`ConvertError::MalformedInput`] - the input carries the `invalid syntax` marker
/// * [`ConvertError::InvalidMember`] - a class body line is not a member
///
/// # Example
/// ```rust
/// use mermaid2plantuml::convert;
///
/// assert_eq!(convert("").unwrap(), "@startuml\n@enduml");
/// ```
pub fn convert(input: &str) -> Result<String, ConvertError> {
    let database = parse(input)?;
    Ok(render(&database))
}

/// Parse a Mermaid class diagram into a database without rendering
///
/// # Example
/// ```rust
/// use mermaid2plantuml::parse;
///
/// let db = parse("classDiagram\n    Order \"1\" *-- \"many\" LineItem").unwrap();
/// assert_eq!(db.relationship_count(), 1);
/// assert_eq!(db.class_count(), 0);
/// assert!(db.is_known("LineItem"));
/// ```
pub fn parse(input: &str) -> Result<ClassDatabase, ConvertError> {
    let mut database = ClassDatabase::new();
    ClassParser::new().parse_document(input, &mut database)?;
    Ok(database)
}

/// Render a parsed database as PlantUML text
pub fn render(database: &ClassDatabase) -> String {
    PlantUmlRenderer::new().render_document(database)
}
