use tracing::{trace, warn};

use crate::algorithm::bitset::OptionSet;
use crate::algorithm::masks::NeighbourMasks;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;

/// Stack of coordinates whose neighbours need re-checking
///
/// Last pushed is processed first. A coordinate may sit on the stack several
/// times; processing it again after its options settled changes nothing.
#[derive(Debug, Default, Clone)]
pub struct Worklist {
    stack: Vec<[usize; 3]>,
    pushes: usize,
    pops: usize,
}

impl Worklist {
    /// Create an empty worklist
    pub const fn new() -> Self {
        Self {
            stack: Vec::new(),
            pushes: 0,
            pops: 0,
        }
    }

    /// Schedule a coordinate for re-checking
    pub fn push(&mut self, coordinate: [usize; 3]) {
        self.stack.push(coordinate);
        self.pushes += 1;
    }

    /// Take the most recently scheduled coordinate
    pub fn pop(&mut self) -> Option<[usize; 3]> {
        let coordinate = self.stack.pop()?;
        self.pops += 1;
        Some(coordinate)
    }

    /// Number of coordinates waiting
    pub const fn len(&self) -> usize {
        self.stack.len()
    }

    /// Test whether nothing is waiting
    pub const fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Total coordinates ever pushed
    pub const fn pushes(&self) -> usize {
        self.pushes
    }

    /// Total coordinates ever popped
    pub const fn pops(&self) -> usize {
        self.pops
    }

    /// Drop pending coordinates and reset the counters
    pub fn clear(&mut self) {
        self.stack.clear();
        self.pushes = 0;
        self.pops = 0;
    }
}

/// Outcome of draining the worklist once
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropagationResult {
    /// Coordinates popped and re-checked
    pub visited: usize,
    /// Neighbour cells whose options shrank (counted once per narrowing)
    pub narrowed: usize,
    /// Cells that lost their last option during this propagation
    pub contradictions: Vec<[usize; 3]>,
}

/// Drain the worklist, narrowing neighbours until nothing changes
///
/// For each popped coordinate, directions are visited in canonical order
/// (Up, Down, Left, Right, Forward, Back). An uncollapsed in-bounds neighbour
/// is narrowed to the union of what the popped cell's remaining options allow
/// in that direction; if that removed anything the neighbour is pushed, even
/// when it is now empty.
///
/// # Errors
///
/// Returns `InvariantViolation` if a popped coordinate is outside the grid or a
/// cell holds a module the masks do not cover. Both indicate a bug or an
/// unvalidated rule table, not an unlucky run.
pub fn propagate(
    grid: &mut Grid,
    masks: &NeighbourMasks,
    worklist: &mut Worklist,
) -> Result<PropagationResult> {
    let mut result = PropagationResult::default();
    let mut permitted = OptionSet::new(masks.module_count());

    while let Some(coordinate) = worklist.pop() {
        result.visited += 1;

        for direction in Direction::ALL {
            let Some(neighbour) = grid.neighbour(coordinate, direction) else {
                continue;
            };
            if grid.get(neighbour).is_none_or(|cell| cell.is_collapsed()) {
                continue;
            }

            let current = grid.get(coordinate).ok_or_else(|| {
                invariant(coordinate, "queued coordinate lies outside the grid")
            })?;
            masks
                .permitted_into(current.options(), direction, &mut permitted)
                .map_err(|module| {
                    invariant(
                        coordinate,
                        &format!("option {module} has no adjacency entry"),
                    )
                })?;

            let Some(cell) = grid.get_mut(neighbour) else {
                continue;
            };
            if cell.narrow(&permitted) {
                result.narrowed += 1;
                trace!(?neighbour, %direction, remaining = cell.options_count(), "narrowed");
                if cell.options_count() == 0 {
                    warn!(?neighbour, "cell ran out of options");
                    result.contradictions.push(neighbour);
                }
                worklist.push(neighbour);
            }
        }
    }

    Ok(result)
}

fn invariant(coordinate: [usize; 3], reason: &str) -> AlgorithmError {
    AlgorithmError::InvariantViolation {
        coordinate,
        reason: reason.to_string(),
    }
}
