use crate::algorithm::bitset::OptionSet;
use crate::rules::library::AdjacencyTable;
use crate::spatial::direction::{Direction, DirectionMap};

/// Adjacency lists converted to bitsets once per solver
///
/// Propagation needs the union of the neighbour lists of every option still
/// open in a cell. Holding each list as an [`OptionSet`] turns that union into a
/// handful of word-wide ORs instead of a per-index scatter.
#[derive(Clone, Debug)]
pub struct NeighbourMasks {
    masks: Vec<DirectionMap<OptionSet>>,
    module_count: usize,
}

impl NeighbourMasks {
    /// Build masks for every module and direction of a validated table
    pub fn new(rules: &AdjacencyTable) -> Self {
        let module_count = rules.module_count();
        let masks = rules
            .iter()
            .map(|lists| lists.map(|_, list| OptionSet::from_indices(list, module_count)))
            .collect();
        Self {
            masks,
            module_count,
        }
    }

    /// Number of modules covered
    pub const fn module_count(&self) -> usize {
        self.module_count
    }

    /// Modules allowed on the `direction` side of `module`
    pub fn get(&self, module: usize, direction: Direction) -> Option<&OptionSet> {
        self.masks.get(module).map(|lists| lists.get(direction))
    }

    /// Write into `permitted` every module allowed on the `direction` side of
    /// at least one module in `options`
    ///
    /// Returns the first option without a mask, if any, leaving `permitted`
    /// partially filled.
    pub fn permitted_into(
        &self,
        options: &OptionSet,
        direction: Direction,
        permitted: &mut OptionSet,
    ) -> Result<(), usize> {
        permitted.clear();
        for module in options.iter() {
            let mask = self.get(module, direction).ok_or(module)?;
            permitted.union_with(mask);
        }
        Ok(())
    }
}
