//! Plugin implementations for diagram types
//!
//! Each plugin implements the core traits for its diagram type. Only class
//! diagrams are supported.

pub mod class;

pub use class::*;
