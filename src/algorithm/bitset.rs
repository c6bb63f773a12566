use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over module indices
///
/// Uses 0-based indexing matching module positions in the library.
/// Indices at or beyond the capacity are never members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSet {
    bits: BitVec,
    capacity: usize,
}

impl OptionSet {
    /// Create a set with no modules present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Create a set containing every module
    pub fn all(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
            capacity,
        }
    }

    /// Create a set holding only `module`
    pub fn single(capacity: usize, module: usize) -> Self {
        let mut set = Self::new(capacity);
        set.insert(module);
        set
    }

    /// Number of module indices the set can hold
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert a module index, returning false if it is out of range
    pub fn insert(&mut self, module: usize) -> bool {
        if module < self.capacity {
            self.bits.set(module, true);
            true
        } else {
            false
        }
    }

    /// Remove a module index
    pub fn remove(&mut self, module: usize) {
        if module < self.capacity {
            self.bits.set(module, false);
        }
    }

    /// Test module membership
    pub fn contains(&self, module: usize) -> bool {
        self.bits.get(module).as_deref() == Some(&true)
    }

    /// Keep only modules also present in `other`
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Add every module present in `other`
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Remove every module
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no modules are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count modules in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate present module indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        self.bits.iter_ones()
    }

    /// The `n`th present module index in ascending order
    pub fn nth(&self, n: usize) -> Option<usize> {
        self.bits.iter_ones().nth(n)
    }

    /// Extract all module indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }

    /// Build a set from module indices, ignoring any out of range
    pub fn from_indices(indices: &[usize], capacity: usize) -> Self {
        let mut set = Self::new(capacity);
        for &module in indices {
            set.insert(module);
        }
        set
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionSet({} modules: {:?})", self.count(), self.to_vec())
    }
}
