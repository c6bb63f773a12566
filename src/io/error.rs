//! Error types and context management for rule compilation and solving

use std::fmt;
use std::path::PathBuf;

/// Main error type for all library operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Failed to parse a tile set or module library file
    LibraryLoad {
        /// Path to the file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Failed to serialize a library or solve output
    LibraryExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Adjacency data is inconsistent with the module set it describes
    MalformedLibrary {
        /// Description of the inconsistency
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Module index exceeds the library
    InvalidModuleIndex {
        /// The invalid module index
        index: usize,
        /// Number of modules in the library
        module_count: usize,
    },

    /// Coordinate lies outside the grid
    CoordinateOutOfBounds {
        /// The offending coordinate
        coordinate: [usize; 3],
        /// Grid dimensions
        dimensions: [usize; 3],
    },

    /// Cell is already committed to a different module
    AlreadyCollapsed {
        /// Module the cell holds
        existing: usize,
        /// Module that was requested
        requested: usize,
    },

    /// Requested placement was already ruled out by earlier constraints
    PrefillConflict {
        /// Cell that was targeted
        coordinate: [usize; 3],
        /// Module that could not be placed there
        module: usize,
    },

    /// Solver state broke a structural invariant
    ///
    /// Never caused by an unlucky run; contradictions are reported in the
    /// solve result instead.
    InvariantViolation {
        /// Cell where the fault was detected
        coordinate: [usize; 3],
        /// Description of the fault
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Log subscriber could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LibraryLoad { path, source } => {
                write!(f, "Failed to load '{}': {source}", path.display())
            }
            Self::LibraryExport { path, source } => {
                write!(f, "Failed to export to '{}': {source}", path.display())
            }
            Self::MalformedLibrary { reason } => {
                write!(f, "Malformed module library: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidModuleIndex {
                index,
                module_count,
            } => {
                write!(
                    f,
                    "Module index {index} is out of bounds ({module_count} modules)"
                )
            }
            Self::CoordinateOutOfBounds {
                coordinate,
                dimensions,
            } => {
                write!(
                    f,
                    "Coordinate {coordinate:?} is outside the {}x{}x{} grid",
                    dimensions[0], dimensions[1], dimensions[2]
                )
            }
            Self::AlreadyCollapsed {
                existing,
                requested,
            } => {
                write!(
                    f,
                    "Cell already collapsed to module {existing}, cannot collapse to {requested}"
                )
            }
            Self::PrefillConflict { coordinate, module } => {
                write!(
                    f,
                    "Module {module} is no longer possible at {coordinate:?}"
                )
            }
            Self::InvariantViolation { coordinate, reason } => {
                write!(f, "Solver invariant violated at {coordinate:?}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { reason } => {
                write!(f, "Failed to initialize logging: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LibraryLoad { source, .. } | Self::LibraryExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for library results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error that remembers the path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> AlgorithmError {
    AlgorithmError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
