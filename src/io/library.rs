//! JSON persistence for tile sets, compiled libraries and solve output
//!
//! A tile set file is either a bare array of tile definitions or an object with a
//! `tiles` array. Library files are the serde form of [`ModuleLibrary`]; loading
//! one re-validates its adjacency table.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::io::error::{AlgorithmError, Result, file_system_error};
use crate::rules::library::{ModuleLibrary, TileDefinition};

#[derive(Deserialize)]
#[serde(untagged)]
enum TileSetFile {
    Bare(Vec<TileDefinition>),
    Wrapped { tiles: Vec<TileDefinition> },
}

/// Read tile definitions from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not parse as a tile set
pub fn load_tiles(path: &Path) -> Result<Vec<TileDefinition>> {
    let file: TileSetFile = read_json(path)?;
    Ok(match file {
        TileSetFile::Bare(tiles) | TileSetFile::Wrapped { tiles } => tiles,
    })
}

/// Read a compiled module library from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be opened, does not parse, or describes
/// an inconsistent adjacency table
pub fn load_library(path: &Path) -> Result<ModuleLibrary> {
    read_json(path)
}

/// Write a compiled module library as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn save_library(library: &ModuleLibrary, path: &Path) -> Result<()> {
    write_json(library, path)
}

/// Write any serializable value as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| file_system_error(path, "create", e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
        AlgorithmError::LibraryExport {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    writer
        .flush()
        .map_err(|e| file_system_error(path, "flush", e))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| file_system_error(path, "open", e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| AlgorithmError::LibraryLoad {
        path: path.to_path_buf(),
        source: e,
    })
}
