//! Solve results packaged for the rendering side

use serde::{Deserialize, Serialize};

use crate::algorithm::executor::{PlacementLayout, SolveReport, SolveStatus, Solver};
use crate::rules::library::ModuleLibrary;

/// One tile to spawn, with its side-table entry resolved
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedModule {
    /// Grid coordinate
    pub coordinate: [usize; 3],
    /// World-space position
    pub position: [f32; 3],
    /// Module index
    pub module: usize,
    /// Variant name (`source_rotation`)
    pub name: String,
    /// Rotation about the vertical axis in degrees
    pub rotation_degrees: u16,
    /// Opaque visual reference, if the tile carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

/// Everything a renderer needs from a finished solve
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveOutput {
    /// Grid extent
    pub dimensions: [usize; 3],
    /// Seed the run was started with
    pub seed: u64,
    /// Final status
    pub status: SolveStatus,
    /// Select-collapse-propagate steps performed
    pub steps: usize,
    /// Collapsed cells ready to spawn
    pub placements: Vec<PlacedModule>,
    /// Cells that ended without a module; reported, not rendered
    pub unresolved: Vec<[usize; 3]>,
}

impl SolveOutput {
    /// Collect placements and unresolved cells from a solver
    pub fn collect(
        solver: &Solver<'_>,
        library: &ModuleLibrary,
        layout: &PlacementLayout,
        seed: u64,
    ) -> Self {
        let SolveReport {
            status,
            contradictions,
            steps,
            ..
        } = solver.report();

        let placements = solver
            .placements(layout)
            .into_iter()
            .filter_map(|placement| {
                let variant = library.variant(placement.module)?;
                Some(PlacedModule {
                    coordinate: placement.coordinate,
                    position: placement.position,
                    module: placement.module,
                    name: variant.name(),
                    rotation_degrees: variant.rotation_degrees(),
                    payload: variant.payload.clone(),
                })
            })
            .collect();

        Self {
            dimensions: solver.grid().dimensions(),
            seed,
            status,
            steps,
            placements,
            unresolved: contradictions,
        }
    }
}
