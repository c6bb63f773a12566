//! Tests for worklist-driven constraint propagation

#[cfg(test)]
mod tests {
    use socketwfc::AlgorithmError;
    use socketwfc::algorithm::masks::NeighbourMasks;
    use socketwfc::algorithm::propagation::{Worklist, propagate};
    use socketwfc::rules::library::AdjacencyTable;
    use socketwfc::spatial::direction::DirectionMap;
    use socketwfc::spatial::grid::Grid;

    // Two modules that only accept themselves on every side
    fn segregated_table() -> AdjacencyTable {
        AdjacencyTable::new(vec![
            DirectionMap::from_fn(|_| vec![0]),
            DirectionMap::from_fn(|_| vec![1]),
        ])
        .unwrap()
    }

    fn open_table(module_count: usize) -> AdjacencyTable {
        let all: Vec<usize> = (0..module_count).collect();
        AdjacencyTable::new(vec![DirectionMap::from_fn(|_| all.clone()); module_count]).unwrap()
    }

    // Tests the worklist pops the most recent push first and keeps duplicates
    // Verified by popping from the front of the stack
    #[test]
    fn test_worklist_is_lifo_with_duplicates() {
        let mut worklist = Worklist::new();
        worklist.push([0, 0, 0]);
        worklist.push([1, 0, 0]);
        worklist.push([0, 0, 0]);
        assert_eq!(worklist.len(), 3);

        assert_eq!(worklist.pop(), Some([0, 0, 0]));
        assert_eq!(worklist.pop(), Some([1, 0, 0]));
        assert_eq!(worklist.pop(), Some([0, 0, 0]));
        assert_eq!(worklist.pop(), None);
        assert!(worklist.is_empty());
        assert_eq!(worklist.pushes(), 3);
        assert_eq!(worklist.pops(), 3);

        worklist.push([2, 2, 2]);
        worklist.clear();
        assert!(worklist.is_empty());
        assert_eq!(worklist.pushes(), 0);
    }

    // Tests a collapse spreads through a whole connected row
    // Verified by not pushing narrowed neighbours
    #[test]
    fn test_collapse_spreads_along_row() {
        let table = segregated_table();
        let masks = NeighbourMasks::new(&table);
        let mut grid = Grid::new([4, 1, 1], 2);
        let mut worklist = Worklist::new();

        grid.cell_mut([0, 0, 0]).unwrap().collapse_to(1).unwrap();
        worklist.push([0, 0, 0]);
        let result = propagate(&mut grid, &masks, &mut worklist).unwrap();

        for x in 1..4 {
            assert_eq!(grid.cell([x, 0, 0]).unwrap().options().to_vec(), vec![1]);
        }
        assert_eq!(result.narrowed, 3);
        assert!(result.contradictions.is_empty());
        assert!(worklist.is_empty());
        assert_eq!(result.visited, worklist.pops());
    }

    // Tests open rules narrow nothing
    // Verified by pushing neighbours even when unchanged
    #[test]
    fn test_open_rules_change_nothing() {
        let table = open_table(3);
        let masks = NeighbourMasks::new(&table);
        let mut grid = Grid::new([2, 2, 2], 3);
        let mut worklist = Worklist::new();

        grid.cell_mut([1, 1, 1]).unwrap().collapse_to(2).unwrap();
        worklist.push([1, 1, 1]);
        let result = propagate(&mut grid, &masks, &mut worklist).unwrap();

        assert_eq!(result.visited, 1);
        assert_eq!(result.narrowed, 0);
        assert_eq!(grid.cell([0, 0, 0]).unwrap().options_count(), 3);
    }

    // Tests an emptied neighbour is reported and still pushed
    // Verified by skipping the push when the neighbour becomes empty
    #[test]
    fn test_contradiction_reported() {
        // Module 0 accepts nothing on its right
        let mut zero = DirectionMap::from_fn(|_| vec![0]);
        zero.right = Vec::new();
        let table = AdjacencyTable::new(vec![zero]).unwrap();
        let masks = NeighbourMasks::new(&table);
        let mut grid = Grid::new([2, 1, 1], 1);
        let mut worklist = Worklist::new();

        grid.cell_mut([0, 0, 0]).unwrap().collapse_to(0).unwrap();
        worklist.push([0, 0, 0]);
        let result = propagate(&mut grid, &masks, &mut worklist).unwrap();

        assert_eq!(result.contradictions, vec![[1, 0, 0]]);
        assert!(grid.cell([1, 0, 0]).unwrap().is_contradiction());
        assert_eq!(worklist.pushes(), 2);
    }

    // Tests collapsed neighbours are never narrowed
    // Verified by removing the collapsed check in propagate
    #[test]
    fn test_collapsed_neighbours_untouched() {
        let table = segregated_table();
        let masks = NeighbourMasks::new(&table);
        let mut grid = Grid::new([2, 1, 1], 2);
        let mut worklist = Worklist::new();

        grid.cell_mut([0, 0, 0]).unwrap().collapse_to(0).unwrap();
        grid.cell_mut([1, 0, 0]).unwrap().collapse_to(1).unwrap();
        worklist.push([0, 0, 0]);
        let result = propagate(&mut grid, &masks, &mut worklist).unwrap();

        assert_eq!(result.narrowed, 0);
        assert_eq!(grid.cell([1, 0, 0]).unwrap().collapsed_module(), Some(1));
    }

    // Tests options the masks do not cover are structural faults
    // Verified by silently skipping options without masks
    #[test]
    fn test_missing_mask_is_invariant_violation() {
        let masks = NeighbourMasks::new(&segregated_table());
        let mut grid = Grid::new([2, 1, 1], 3);
        let mut worklist = Worklist::new();
        worklist.push([0, 0, 0]);

        match propagate(&mut grid, &masks, &mut worklist) {
            Err(AlgorithmError::InvariantViolation { coordinate, reason }) => {
                assert_eq!(coordinate, [0, 0, 0]);
                assert!(reason.contains("option 2"));
            }
            other => panic!("expected InvariantViolation, got {other:?}"),
        }
    }
}
