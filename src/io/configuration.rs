//! Algorithm constants and runtime configuration defaults

// Rotation model for asymmetric tiles
/// Quarter turns generated for an asymmetric tile
pub const ROTATION_STEPS: u8 = 4;
/// Degrees in one quarter turn about the vertical axis
pub const QUARTER_TURN_DEGREES: u16 = 90;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid extent along any axis
pub const MAX_GRID_DIMENSION: usize = 1024;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default grid extent (x, y, z)
pub const DEFAULT_GRID_SIZE: [usize; 3] = [8, 4, 8];
/// Default world-space edge length of one cell
pub const DEFAULT_CELL_SIZE: f32 = 1.0;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_solved";
/// Suffix added to compiled library filenames
pub const LIBRARY_SUFFIX: &str = "_library";

// Logging
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn,socketwfc=info";
/// Log filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "warn,socketwfc=debug";
/// Log filter used with `--quiet`
pub const QUIET_LOG_FILTER: &str = "error";
