//! Superposition state of a single grid location

use rand::Rng;

use crate::algorithm::bitset::OptionSet;
use crate::io::error::{AlgorithmError, Result};

/// Remaining module options for one grid location
///
/// The option count is cached alongside the bitset and always equals its
/// popcount. A collapsed cell holds exactly its chosen module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    options: OptionSet,
    options_count: usize,
    collapsed: Option<usize>,
}

impl GridCell {
    /// Create an uncollapsed cell allowing every one of `module_count` modules
    pub fn new(module_count: usize) -> Self {
        Self {
            options: OptionSet::all(module_count),
            options_count: module_count,
            collapsed: None,
        }
    }

    /// Currently possible modules
    pub const fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Number of currently possible modules (the cell's entropy)
    pub const fn options_count(&self) -> usize {
        self.options_count
    }

    /// Whether the cell has been committed to a module
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed.is_some()
    }

    /// The committed module, if collapsed
    pub const fn collapsed_module(&self) -> Option<usize> {
        self.collapsed
    }

    /// Whether the cell ran out of options without being collapsed
    ///
    /// Cells created with zero modules never count as contradictions: they
    /// had nothing to lose.
    pub fn is_contradiction(&self) -> bool {
        self.collapsed.is_none() && self.options_count == 0 && self.options.capacity() > 0
    }

    /// Commit the cell to a single module
    ///
    /// Calling again with the same module is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `InvalidModuleIndex` if `module` is outside the cell's range, or
    /// `AlreadyCollapsed` if the cell was committed to a different module
    pub fn collapse_to(&mut self, module: usize) -> Result<()> {
        let module_count = self.options.capacity();
        if module >= module_count {
            return Err(AlgorithmError::InvalidModuleIndex {
                index: module,
                module_count,
            });
        }
        match self.collapsed {
            Some(existing) if existing == module => Ok(()),
            Some(existing) => Err(AlgorithmError::AlreadyCollapsed {
                existing,
                requested: module,
            }),
            None => {
                self.options = OptionSet::single(module_count, module);
                self.options_count = 1;
                self.collapsed = Some(module);
                Ok(())
            }
        }
    }

    /// Uniformly random module among the remaining options
    pub fn pick_random_option<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        if self.options_count == 0 {
            return None;
        }
        let choice = rng.random_range(0..self.options_count);
        self.options.nth(choice)
    }

    /// Remove every option not present in `allowed`
    ///
    /// Returns whether anything was removed.
    pub fn narrow(&mut self, allowed: &OptionSet) -> bool {
        let before = self.options_count;
        self.options.intersect_with(allowed);
        self.options_count = self.options.count();
        self.options_count != before
    }
}
