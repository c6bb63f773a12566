//! Spatial data structures shared by the rule compiler and the solver
//!
//! This module contains:
//! - The six-direction neighbour model and per-direction value maps
//! - The dense 3D grid of cell states

/// Neighbour directions, offsets and per-direction maps
pub mod direction;
/// Bounds-checked 3D cell storage
pub mod grid;

pub use direction::{Direction, DirectionMap};
pub use grid::Grid;
