//! Socket-driven wave function collapse over a discrete 3D grid
//!
//! Tile definitions label each of their six faces with a socket. The rule compiler
//! expands them into rotation variants and derives which variants may sit next to
//! each other; the solver then fills a grid by repeatedly collapsing the least
//! certain cell and propagating the resulting constraints to its neighbours.

#![forbid(unsafe_code)]

/// Cell state, selection, propagation and the solver executor
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Face labels, tile definitions and the adjacency rule compiler
pub mod rules;
/// Direction model and the dense 3D cell grid
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
