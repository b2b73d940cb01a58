//! Core renderer trait for diagram output
//!
//! This trait defines the interface for rendering diagram data into a
//! target notation.

use anyhow::Result;

/// Core trait for diagram renderers
///
/// # Example
/// ```
/// use mermaid2plantuml::core::Renderer;
/// use mermaid2plantuml::plugins::class::{ClassDatabase, PlantUmlRenderer};
///
/// let db = ClassDatabase::new();
/// let renderer = PlantUmlRenderer::new();
/// let output = renderer.render(&db).unwrap();
/// assert_eq!(output, "@startuml\n@enduml");
/// ```
pub trait Renderer<D>: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the diagram database into the output format
    fn render(&self, database: &D) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}
