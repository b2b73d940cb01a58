//! Core abstractions for diagram conversion
//!
//! The traits here separate reading a notation (`Parser`) from writing one
//! (`Renderer`), with a diagram-specific database in between.

pub mod chumsky_utils;
mod error;
pub mod logging;
mod parser;
mod renderer;

pub use error::*;
pub use logging::*;
pub use parser::*;
pub use renderer::*;
