//! Rule compilation from socket-labelled tiles to an adjacency table
//!
//! Every tile is expanded into its rotation variants, then every ordered pair of
//! variants is compared on every direction: `i` accepts `j` on side `d` when the
//! label on `i`'s `d` face equals the label on `j`'s opposite face. The pairwise
//! scan is quadratic in the variant count, which is fine for libraries of a few
//! hundred variants.

use tracing::{debug, info};

use crate::io::configuration::ROTATION_STEPS;
use crate::rules::faces::Faces;
use crate::rules::library::{AdjacencyTable, ModuleLibrary, ModuleVariant, TileDefinition};
use crate::spatial::direction::DirectionMap;

/// Expand tiles into rotation variants ordered by tile, then rotation step
///
/// Symmetric tiles yield only the unrotated variant.
pub fn expand_variants(tiles: &[TileDefinition]) -> Vec<ModuleVariant> {
    let mut variants = Vec::with_capacity(tiles.iter().map(TileDefinition::variant_count).sum());

    for tile in tiles {
        let rotations = if tile.symmetric { 1 } else { ROTATION_STEPS };
        for rotation in 0..rotations {
            variants.push(ModuleVariant {
                source_id: tile.id.clone(),
                rotation,
                faces: tile.faces.rotated(rotation),
                payload: tile.payload.clone(),
            });
        }
        debug!(tile = %tile.id, rotations, "expanded tile");
    }

    variants
}

/// Derive neighbour lists for a set of face label sets
///
/// Lists are filled in ascending candidate order, so each one is sorted and free
/// of duplicates.
pub fn derive_adjacency(faces: &[&Faces]) -> AdjacencyTable {
    let modules = faces
        .iter()
        .map(|source| {
            DirectionMap::from_fn(|direction| {
                let socket = source.get(direction);
                faces
                    .iter()
                    .enumerate()
                    .filter(|(_, target)| socket.matches(target.get(direction.opposite())))
                    .map(|(index, _)| index)
                    .collect()
            })
        })
        .collect();

    AdjacencyTable::from_compiled(modules)
}

/// Compile tile definitions into a module library
///
/// An empty tile list compiles to an empty library. Labels that never match
/// simply leave the corresponding lists empty; nothing is validated here.
pub fn compile(tiles: &[TileDefinition]) -> ModuleLibrary {
    let variants = expand_variants(tiles);
    let faces: Vec<&Faces> = variants.iter().map(|variant| &variant.faces).collect();
    let rules = derive_adjacency(&faces);

    let connections: usize = rules
        .iter()
        .map(|lists| lists.iter().map(|(_, list)| list.len()).sum::<usize>())
        .sum();
    info!(
        tiles = tiles.len(),
        variants = variants.len(),
        connections,
        "compiled module library"
    );

    ModuleLibrary::from_compiled(variants, rules)
}
