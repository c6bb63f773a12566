//! Tile definitions, compiled module variants and the adjacency table
//!
//! A [`ModuleLibrary`] is built once, either by the rule compiler or by loading a
//! previously saved library, and is then handed by reference to every solver run.
//! The adjacency table can only be constructed validated, so the solver never has
//! to re-check neighbour indices while it works.

use serde::{Deserialize, Deserializer, Serialize};

use crate::io::configuration::QUARTER_TURN_DEGREES;
use crate::io::error::{AlgorithmError, Result};
use crate::rules::faces::Faces;
use crate::spatial::direction::{Direction, DirectionMap};

/// Author-supplied tile description consumed by the rule compiler
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDefinition {
    /// Identity of the tile, used to name its variants
    pub id: String,
    /// Socket label on each face in the unrotated orientation
    pub faces: Faces,
    /// Symmetric tiles produce a single variant instead of four rotations
    #[serde(default)]
    pub symmetric: bool,
    /// Opaque visual reference forwarded to the rendering side table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl TileDefinition {
    /// Create an asymmetric tile without a visual payload
    pub fn new(id: impl Into<String>, faces: Faces) -> Self {
        Self {
            id: id.into(),
            faces,
            symmetric: false,
            payload: None,
        }
    }

    /// Mark the tile as rotation-symmetric
    #[must_use]
    pub const fn symmetric(mut self) -> Self {
        self.symmetric = true;
        self
    }

    /// Attach a visual payload
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Number of variants the compiler generates for this tile
    pub const fn variant_count(&self) -> usize {
        if self.symmetric { 1 } else { 4 }
    }
}

/// One rotation of a tile definition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleVariant {
    /// Identity of the tile this variant came from
    pub source_id: String,
    /// Quarter turns applied about the vertical axis (0..=3)
    pub rotation: u8,
    /// Face labels after rotation
    pub faces: Faces,
    /// Opaque visual reference copied from the tile definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl ModuleVariant {
    /// Variant name in `source_rotation` form
    pub fn name(&self) -> String {
        format!("{}_{}", self.source_id, self.rotation)
    }

    /// Rotation about the vertical axis in degrees
    pub fn rotation_degrees(&self) -> u16 {
        u16::from(self.rotation) * QUARTER_TURN_DEGREES
    }
}

#[derive(Deserialize)]
struct RawAdjacency {
    modules: Vec<DirectionMap<Vec<usize>>>,
}

/// Per-module, per-direction lists of compatible neighbour modules
///
/// `neighbours(i, d)` holds `j` when module `j` may sit next to module `i` on
/// its `d` side. Every stored index is below [`AdjacencyTable::module_count`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AdjacencyTable {
    modules: Vec<DirectionMap<Vec<usize>>>,
}

impl AdjacencyTable {
    /// Build a table from raw neighbour lists
    ///
    /// # Errors
    ///
    /// Returns `MalformedLibrary` if any list references a module index outside
    /// the table
    pub fn new(modules: Vec<DirectionMap<Vec<usize>>>) -> Result<Self> {
        let module_count = modules.len();
        for (module, lists) in modules.iter().enumerate() {
            for (direction, neighbours) in lists.iter() {
                if let Some(&neighbour) = neighbours.iter().find(|&&n| n >= module_count) {
                    return Err(AlgorithmError::MalformedLibrary {
                        reason: format!(
                            "module {module} lists neighbour {neighbour} towards {direction}, \
                             but only {module_count} modules exist"
                        ),
                    });
                }
            }
        }
        Ok(Self { modules })
    }

    /// Wrap lists the compiler produced from a closed variant set
    pub(crate) const fn from_compiled(modules: Vec<DirectionMap<Vec<usize>>>) -> Self {
        Self { modules }
    }

    /// Number of modules described by the table
    pub const fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Whether the table describes no modules
    pub const fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Modules allowed next to `module` on its `direction` side
    ///
    /// Unknown modules have no neighbours.
    pub fn neighbours(&self, module: usize, direction: Direction) -> &[usize] {
        self.modules
            .get(module)
            .map(|lists| lists.get(direction).as_slice())
            .unwrap_or_default()
    }

    /// Whether `neighbour` may sit on the `direction` side of `module`
    pub fn allows(&self, module: usize, direction: Direction, neighbour: usize) -> bool {
        self.neighbours(module, direction).contains(&neighbour)
    }

    /// Iterate the per-direction lists of every module in index order
    pub fn iter(&self) -> impl Iterator<Item = &DirectionMap<Vec<usize>>> {
        self.modules.iter()
    }
}

// Loaded tables go through the same validation as hand-built ones
impl<'de> Deserialize<'de> for AdjacencyTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawAdjacency::deserialize(deserializer)?;
        Self::new(raw.modules).map_err(serde::de::Error::custom)
    }
}

#[derive(Deserialize)]
struct RawLibrary {
    variants: Vec<ModuleVariant>,
    rules: AdjacencyTable,
}

/// Compiled module set: the rendering side table plus the solver's rules
///
/// Variant `i` of [`ModuleLibrary::variants`] is module index `i` in the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ModuleLibrary {
    variants: Vec<ModuleVariant>,
    rules: AdjacencyTable,
}

impl ModuleLibrary {
    /// Pair a side table with its adjacency rules
    ///
    /// # Errors
    ///
    /// Returns `MalformedLibrary` if the variant count differs from the number
    /// of modules in the table
    pub fn new(variants: Vec<ModuleVariant>, rules: AdjacencyTable) -> Result<Self> {
        if variants.len() != rules.module_count() {
            return Err(AlgorithmError::MalformedLibrary {
                reason: format!(
                    "{} variants but the adjacency table describes {} modules",
                    variants.len(),
                    rules.module_count()
                ),
            });
        }
        Ok(Self { variants, rules })
    }

    /// Pair compiler output whose lengths agree by construction
    pub(crate) const fn from_compiled(variants: Vec<ModuleVariant>, rules: AdjacencyTable) -> Self {
        Self { variants, rules }
    }

    /// Number of modules
    pub const fn module_count(&self) -> usize {
        self.variants.len()
    }

    /// Side table of variants, indexed by module
    pub fn variants(&self) -> &[ModuleVariant] {
        &self.variants
    }

    /// Variant for a module index
    pub fn variant(&self, module: usize) -> Option<&ModuleVariant> {
        self.variants.get(module)
    }

    /// Adjacency rules consumed by the solver
    pub const fn rules(&self) -> &AdjacencyTable {
        &self.rules
    }

    /// Module index of a variant by name (`source_rotation`)
    pub fn find(&self, name: &str) -> Option<usize> {
        self.variants.iter().position(|variant| variant.name() == name)
    }
}

impl<'de> Deserialize<'de> for ModuleLibrary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawLibrary::deserialize(deserializer)?;
        Self::new(raw.variants, raw.rules).map_err(serde::de::Error::custom)
    }
}
