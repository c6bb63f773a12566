//! Lowest-entropy cell selection

use crate::spatial::grid::Grid;

/// Find the uncollapsed cell with the fewest remaining options
///
/// Cells with no options left are contradictions and are skipped. Ties go to
/// the first cell in scan order (x, then y, then z ascending), which keeps runs
/// reproducible for a fixed random source. Returns `None` once no selectable
/// cell remains.
pub fn lowest_entropy_cell(grid: &Grid) -> Option<[usize; 3]> {
    let mut best: Option<([usize; 3], usize)> = None;

    for (coordinate, cell) in grid.iter() {
        if cell.is_collapsed() || cell.options_count() == 0 {
            continue;
        }
        let entropy = cell.options_count();
        if best.is_none_or(|(_, lowest)| entropy < lowest) {
            best = Some((coordinate, entropy));
            // Nothing beats a single remaining option
            if entropy == 1 {
                break;
            }
        }
    }

    best.map(|(coordinate, _)| coordinate)
}

/// Count uncollapsed cells that still have options
pub fn selectable_cells(grid: &Grid) -> usize {
    grid.iter()
        .filter(|(_, cell)| !cell.is_collapsed() && cell.options_count() > 0)
        .count()
}
