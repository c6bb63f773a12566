//! Tile authoring data and the adjacency rule compiler

/// Tile expansion into rotation variants and adjacency derivation
pub mod compiler;
/// Socket labels and face set rotation
pub mod faces;
/// Tile definitions, variants, adjacency tables and compiled libraries
pub mod library;

pub use compiler::compile;
pub use faces::{FaceLabel, Faces};
pub use library::{AdjacencyTable, ModuleLibrary, ModuleVariant, TileDefinition};
