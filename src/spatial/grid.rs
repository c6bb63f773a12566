//! Dense 3D storage for cell superposition state
//!
//! Cells live in a single `ndarray` allocation indexed `[x, y, z]`. Bounds are
//! checked here, at the grid boundary, so the solver never indexes blindly.

use ndarray::Array3;

use crate::algorithm::cell::GridCell;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::direction::{self, Direction};

/// Grid of cells covering `[0, x) × [0, y) × [0, z)`
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array3<GridCell>,
    dimensions: [usize; 3],
    module_count: usize,
}

impl Grid {
    /// Create a grid where every cell still allows all `module_count` modules
    pub fn new(dimensions: [usize; 3], module_count: usize) -> Self {
        let [x, y, z] = dimensions;
        Self {
            cells: Array3::from_shape_fn((x, y, z), |_| GridCell::new(module_count)),
            dimensions,
            module_count,
        }
    }

    /// Grid extent along x, y and z
    pub const fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    /// Number of modules each cell was created with
    pub const fn module_count(&self) -> usize {
        self.module_count
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether any axis has zero extent
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Test whether a coordinate lies inside the grid
    pub const fn contains(&self, coordinate: [usize; 3]) -> bool {
        coordinate[0] < self.dimensions[0]
            && coordinate[1] < self.dimensions[1]
            && coordinate[2] < self.dimensions[2]
    }

    /// Cell at a coordinate, or `None` outside the grid
    pub fn get(&self, coordinate: [usize; 3]) -> Option<&GridCell> {
        self.cells.get(coordinate)
    }

    /// Mutable cell at a coordinate, or `None` outside the grid
    pub fn get_mut(&mut self, coordinate: [usize; 3]) -> Option<&mut GridCell> {
        self.cells.get_mut(coordinate)
    }

    /// Cell at a coordinate, reporting out-of-bounds access as an error
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfBounds` if the coordinate is outside the grid
    pub fn cell(&self, coordinate: [usize; 3]) -> Result<&GridCell> {
        self.cells
            .get(coordinate)
            .ok_or(AlgorithmError::CoordinateOutOfBounds {
                coordinate,
                dimensions: self.dimensions,
            })
    }

    /// Mutable cell at a coordinate, reporting out-of-bounds access as an error
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfBounds` if the coordinate is outside the grid
    pub fn cell_mut(&mut self, coordinate: [usize; 3]) -> Result<&mut GridCell> {
        let dimensions = self.dimensions;
        self.cells
            .get_mut(coordinate)
            .ok_or(AlgorithmError::CoordinateOutOfBounds {
                coordinate,
                dimensions,
            })
    }

    /// In-bounds neighbour of `coordinate` in `direction`
    pub fn neighbour(&self, coordinate: [usize; 3], direction: Direction) -> Option<[usize; 3]> {
        direction::step(coordinate, direction).filter(|&next| self.contains(next))
    }

    /// Iterate cells with their coordinates in scan order (x, then y, then z ascending)
    pub fn iter(&self) -> impl Iterator<Item = ([usize; 3], &GridCell)> {
        self.cells
            .indexed_iter()
            .map(|((x, y, z), cell)| ([x, y, z], cell))
    }

    /// Restore every cell to its initial all-options state
    pub fn reset(&mut self) {
        let module_count = self.module_count;
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = GridCell::new(module_count));
    }

    /// Borrow the underlying array
    pub const fn cells(&self) -> &Array3<GridCell> {
        &self.cells
    }
}
