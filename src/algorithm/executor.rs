//! Solver state machine, run reporting and placement output

use ndarray::Array3;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    algorithm::masks::NeighbourMasks,
    algorithm::propagation::{Worklist, propagate},
    algorithm::selection::lowest_entropy_cell,
    io::configuration::MAX_GRID_DIMENSION,
    io::error::{AlgorithmError, Result, invalid_parameter},
    rules::library::AdjacencyTable,
    spatial::grid::Grid,
};

/// Lifecycle of a solve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// Selectable cells remain
    Running,
    /// Every cell collapsed
    Done,
    /// No selectable cell remains and at least one cell ran out of options
    Contradiction,
}

/// Result of a single select-collapse-propagate step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A cell was committed and its constraints propagated
    Collapsed {
        /// Cell that was collapsed
        coordinate: [usize; 3],
        /// Module it was committed to
        module: usize,
    },
    /// No selectable cell was left; the run is over
    Finished(SolveStatus),
}

/// Final resolution state of one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Committed to a module
    Collapsed(usize),
    /// Ran out of options without being collapsed
    Contradiction,
    /// Still open, with this many options left
    Undecided(usize),
}

/// Summary of a finished (or interrupted) run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Status when the report was taken
    pub status: SolveStatus,
    /// Number of collapsed cells
    pub collapsed: usize,
    /// Cells that ran out of options, in scan order
    pub contradictions: Vec<[usize; 3]>,
    /// Select-collapse-propagate steps performed
    pub steps: usize,
    /// Coordinates processed by propagation
    pub propagation_pops: usize,
}

/// A collapsed cell positioned for the rendering side
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Grid coordinate
    pub coordinate: [usize; 3],
    /// World-space position derived from the layout
    pub position: [f32; 3],
    /// Module index into the library's side table
    pub module: usize,
}

/// Mapping from grid coordinates to world space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementLayout {
    /// Edge length of one cell
    pub cell_size: f32,
    /// World position of cell (0, 0, 0)
    pub offset: [f32; 3],
}

impl PlacementLayout {
    /// World position of a grid coordinate
    pub fn position(&self, coordinate: [usize; 3]) -> [f32; 3] {
        let mut position = self.offset;
        for (axis, &index) in position.iter_mut().zip(&coordinate) {
            *axis += index as f32 * self.cell_size;
        }
        position
    }
}

/// Seeded random source for reproducible solves
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Underlying generator, for passing to [`Solver::run`]
    pub const fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

/// Wave function collapse solver over a 3D grid
///
/// Owns the cell grid exclusively and borrows a validated adjacency table,
/// which may be shared read-only with any number of other solvers. Randomness
/// is injected per call so a fixed seed reproduces a run exactly.
pub struct Solver<'a> {
    grid: Grid,
    rules: &'a AdjacencyTable,
    masks: NeighbourMasks,
    worklist: Worklist,
    status: SolveStatus,
    steps: usize,
}

impl<'a> Solver<'a> {
    /// Create a solver with every cell allowing every module
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any dimension exceeds `MAX_GRID_DIMENSION`
    pub fn new(dimensions: [usize; 3], rules: &'a AdjacencyTable) -> Result<Self> {
        if let Some(&too_large) = dimensions.iter().find(|&&d| d > MAX_GRID_DIMENSION) {
            return Err(invalid_parameter(
                "dimensions",
                &too_large,
                &format!("each axis must be at most {MAX_GRID_DIMENSION}"),
            ));
        }

        let grid = Grid::new(dimensions, rules.module_count());
        debug!(
            ?dimensions,
            modules = rules.module_count(),
            "initialized grid"
        );

        Ok(Self {
            grid,
            rules,
            masks: NeighbourMasks::new(rules),
            worklist: Worklist::new(),
            status: SolveStatus::Running,
            steps: 0,
        })
    }

    /// Current cell states
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Adjacency rules the solver was built with
    pub const fn rules(&self) -> &'a AdjacencyTable {
        self.rules
    }

    /// Current status
    pub const fn status(&self) -> SolveStatus {
        self.status
    }

    /// Select-collapse-propagate steps performed so far
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Perform one select-collapse-propagate step
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if propagation hits a structural fault
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<StepOutcome> {
        if self.status != SolveStatus::Running {
            return Ok(StepOutcome::Finished(self.status));
        }

        let Some(coordinate) = lowest_entropy_cell(&self.grid) else {
            self.status = self.final_status();
            info!(
                status = ?self.status,
                steps = self.steps,
                contradictions = self.contradictions().len(),
                "generation finished"
            );
            return Ok(StepOutcome::Finished(self.status));
        };

        let cell = self.grid.cell_mut(coordinate)?;
        let Some(module) = cell.pick_random_option(rng) else {
            // Selection only returns cells with options; nothing to commit
            return Ok(StepOutcome::Finished(self.status));
        };
        cell.collapse_to(module)?;
        self.steps += 1;
        debug!(?coordinate, module, "collapsed");

        self.worklist.push(coordinate);
        propagate(&mut self.grid, &self.masks, &mut self.worklist)?;

        Ok(StepOutcome::Collapsed { coordinate, module })
    }

    /// Step until no selectable cell remains
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if propagation hits a structural fault
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Result<SolveReport> {
        while let StepOutcome::Collapsed { .. } = self.step(rng)? {}
        Ok(self.report())
    }

    /// Commit a cell to a chosen module before or during a run and propagate
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfBounds` for coordinates outside the grid,
    /// `InvalidModuleIndex` for modules outside the library, or
    /// `PrefillConflict` if earlier constraints already ruled the module out
    pub fn collapse_at(&mut self, coordinate: [usize; 3], module: usize) -> Result<()> {
        let module_count = self.rules.module_count();
        if module >= module_count {
            return Err(AlgorithmError::InvalidModuleIndex {
                index: module,
                module_count,
            });
        }

        let cell = self.grid.cell_mut(coordinate)?;
        if cell.collapsed_module() == Some(module) {
            return Ok(());
        }
        if cell.is_collapsed() || !cell.options().contains(module) {
            return Err(AlgorithmError::PrefillConflict { coordinate, module });
        }
        cell.collapse_to(module)?;
        debug!(?coordinate, module, "prefilled");

        self.worklist.push(coordinate);
        propagate(&mut self.grid, &self.masks, &mut self.worklist)?;
        Ok(())
    }

    /// Return every cell to its initial state so the solver can run again
    pub fn reset(&mut self) {
        self.grid.reset();
        self.worklist.clear();
        self.status = SolveStatus::Running;
        self.steps = 0;
    }

    /// Cells that ran out of options, in scan order
    pub fn contradictions(&self) -> Vec<[usize; 3]> {
        self.grid
            .iter()
            .filter(|(_, cell)| cell.is_contradiction())
            .map(|(coordinate, _)| coordinate)
            .collect()
    }

    /// Number of collapsed cells
    pub fn collapsed_count(&self) -> usize {
        self.grid.iter().filter(|(_, cell)| cell.is_collapsed()).count()
    }

    /// Summary of the current state
    pub fn report(&self) -> SolveReport {
        SolveReport {
            status: self.status,
            collapsed: self.collapsed_count(),
            contradictions: self.contradictions(),
            steps: self.steps,
            propagation_pops: self.worklist.pops(),
        }
    }

    /// Per-cell resolution as a dense array indexed `[x, y, z]`
    pub fn resolution(&self) -> Array3<Resolution> {
        self.grid.cells().map(|cell| match cell.collapsed_module() {
            Some(module) => Resolution::Collapsed(module),
            None if cell.is_contradiction() => Resolution::Contradiction,
            None => Resolution::Undecided(cell.options_count()),
        })
    }

    /// Collapsed cells positioned in world space, in scan order
    pub fn placements(&self, layout: &PlacementLayout) -> Vec<Placement> {
        self.grid
            .iter()
            .filter_map(|(coordinate, cell)| {
                cell.collapsed_module().map(|module| Placement {
                    coordinate,
                    position: layout.position(coordinate),
                    module,
                })
            })
            .collect()
    }

    fn final_status(&self) -> SolveStatus {
        if self.grid.iter().any(|(_, cell)| cell.is_contradiction()) {
            SolveStatus::Contradiction
        } else {
            SolveStatus::Done
        }
    }
}
