//! PlantUML renderer
//!
//! Renders a [`ClassDatabase`] as PlantUML class diagram text.

use anyhow::Result;
use tracing::{debug, span, Level};

use super::database::{ClassDatabase, ClassDefinition};
use crate::core::Renderer;

/// Opening line of every PlantUML document
pub const START_MARKER: &str = "@startuml";

/// Closing line of every PlantUML document
pub const END_MARKER: &str = "@enduml";

/// Indentation of member lines inside a class body
const MEMBER_INDENT: &str = "    ";

/// PlantUML class diagram renderer
///
/// Output layout: the start marker, every relationship line verbatim in
/// encounter order, every class block in ascending name order, then the end
/// marker with no trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantUmlRenderer;

impl PlantUmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a database to PlantUML text. Rendering cannot fail.
    pub fn render_document(&self, database: &ClassDatabase) -> String {
        let render_span = span!(
            Level::INFO,
            "render_plantuml",
            classes = database.class_count(),
            relationships = database.relationship_count()
        );
        let _enter = render_span.enter();

        let mut output = String::new();
        output.push_str(START_MARKER);
        output.push('\n');

        for line in database.relation_lines() {
            output.push_str(line);
            output.push('\n');
        }

        for (name, definition) in database.classes() {
            write_class(&mut output, name, definition);
        }

        output.push_str(END_MARKER);
        debug!(output_len = output.len(), "Rendered PlantUML");
        output
    }
}

fn write_class(output: &mut String, name: &str, definition: &ClassDefinition) {
    output.push_str("class ");
    output.push_str(name);
    output.push_str(" {\n");
    for member in &definition.members {
        output.push_str(MEMBER_INDENT);
        output.push_str(member);
        output.push('\n');
    }
    output.push_str("}\n");
}

impl Renderer<ClassDatabase> for PlantUmlRenderer {
    type Output = String;

    fn render(&self, database: &ClassDatabase) -> Result<Self::Output> {
        Ok(self.render_document(database))
    }

    fn name(&self) -> &'static str {
        "plantuml"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "puml"
    }
}
