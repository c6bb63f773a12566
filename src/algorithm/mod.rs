/// Fixed-size bitset for module option tracking
pub mod bitset;
/// Superposition state of a single grid cell
pub mod cell;
/// Solver executor, run state machine and result reporting
pub mod executor;
/// Per-module neighbour bitsets derived from adjacency rules
pub mod masks;
/// Worklist-driven constraint propagation
pub mod propagation;
/// Lowest-entropy cell selection
pub mod selection;

pub use executor::{SolveReport, SolveStatus, Solver};
