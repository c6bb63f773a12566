//! Input/output: configuration, persistence, logging and the command line

/// Command-line parsing and the compile-and-solve runner
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// JSON persistence of tile sets and compiled libraries
pub mod library;
/// `tracing` subscriber installation
pub mod logging;
/// Solve results packaged for rendering
pub mod output;
/// Terminal progress display
pub mod progress;
