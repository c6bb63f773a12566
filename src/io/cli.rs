//! Command-line interface for compiling tile sets and solving grids

use crate::algorithm::executor::{PlacementLayout, RandomSelector, SolveStatus, StepOutcome, Solver};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE, DEFAULT_LOG_FILTER, DEFAULT_SEED, LIBRARY_SUFFIX,
    OUTPUT_SUFFIX, QUIET_LOG_FILTER, VERBOSE_LOG_FILTER,
};
use crate::io::error::{AlgorithmError, Result, file_system_error, invalid_parameter};
use crate::io::library::{load_library, load_tiles, save_library, write_json};
use crate::io::output::SolveOutput;
use crate::io::progress::SolveProgress;
use crate::rules::compiler::compile;
use crate::rules::library::ModuleLibrary;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "socketwfc")]
#[command(
    author,
    version,
    about = "Fill a 3D grid with socket-compatible tiles using wave function collapse"
)]
/// Command-line arguments for the generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Tile set JSON file (or a compiled library with --compiled)
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid size as X,Y,Z
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_triple::<usize>)]
    pub size: Option<[usize; 3]>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// World-space edge length of one cell
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f32,

    /// World position of cell (0,0,0) as X,Y,Z
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_triple::<f32>, allow_hyphen_values = true)]
    pub offset: Option<[f32; 3]>,

    /// Output JSON path ("-" for stdout); defaults to <target>_solved.json
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the compiled module library to this path
    #[arg(short, long)]
    pub library_out: Option<PathBuf>,

    /// Treat TARGET as an already compiled module library
    #[arg(short, long)]
    pub compiled: bool,

    /// Compile the tile set and write the library without solving
    #[arg(long, conflicts_with = "compiled")]
    pub compile_only: bool,

    /// Suppress progress output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every collapse
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Grid dimensions, falling back to the default size
    pub fn dimensions(&self) -> [usize; 3] {
        self.size.unwrap_or(DEFAULT_GRID_SIZE)
    }

    /// Mapping from grid coordinates to world space
    pub fn layout(&self) -> PlacementLayout {
        PlacementLayout {
            cell_size: self.cell_size,
            offset: self.offset.unwrap_or([0.0; 3]),
        }
    }

    /// Log filter implied by the verbosity flags
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet {
            QUIET_LOG_FILTER
        } else if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Parse a comma separated triple such as `8,4,8`
///
/// # Errors
///
/// Returns a message if the input does not hold exactly three parseable values
pub fn parse_triple<T>(input: &str) -> std::result::Result<[T; 3], String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let parts: Vec<T> = input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<T>()
                .map_err(|e| format!("'{}' is not a valid number: {e}", part.trim()))
        })
        .collect::<std::result::Result<_, _>>()?;
    <[T; 3]>::try_from(parts).map_err(|parts| format!("expected 3 values, got {}", parts.len()))
}

/// Runs one compile-and-solve job described by the command line
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a processor for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load or compile the library, then solve and write the result
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target cannot be read or parsed
    /// - The grid size is invalid
    /// - The solver hits a structural fault
    /// - The output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let library = self.load_library()?;

        if self.cli.compile_only || self.cli.library_out.is_some() {
            let library_path = self
                .cli
                .library_out
                .clone()
                .unwrap_or_else(|| Self::get_library_path(&self.cli.target));
            save_library(&library, &library_path)?;
            info!(path = %library_path.display(), "wrote module library");
        }

        if self.cli.compile_only {
            return Ok(());
        }

        let output = self.solve(&library)?;

        match self.cli.output.as_deref() {
            Some(path) if path == Path::new("-") => Self::write_stdout(&output),
            Some(path) => write_json(&output, path),
            None => write_json(&output, &Self::get_output_path(&self.cli.target)),
        }
    }

    fn load_library(&self) -> Result<ModuleLibrary> {
        if !self.cli.target.is_file() {
            return Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be an existing JSON file",
            ));
        }

        if self.cli.compiled {
            load_library(&self.cli.target)
        } else {
            let tiles = load_tiles(&self.cli.target)?;
            Ok(compile(&tiles))
        }
    }

    fn solve(&self, library: &ModuleLibrary) -> Result<SolveOutput> {
        let start_time = Instant::now();
        let mut solver = Solver::new(self.cli.dimensions(), library.rules())?;
        let mut random = RandomSelector::new(self.cli.seed);

        let progress = if self.cli.should_show_progress() {
            let name = self
                .cli
                .target
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            SolveProgress::new(&name, solver.grid().len())
        } else {
            SolveProgress::hidden()
        };

        let mut collapsed = 0;
        while let StepOutcome::Collapsed { .. } = solver.step(random.rng())? {
            collapsed += 1;
            progress.update(collapsed, 0);
        }
        let report = solver.report();
        progress.update(report.collapsed, report.contradictions.len());
        progress.finish();

        if report.status == SolveStatus::Contradiction {
            warn!(
                contradictions = report.contradictions.len(),
                "generation ended with unresolved cells"
            );
        }
        info!(
            collapsed = report.collapsed,
            steps = report.steps,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "solve complete"
        );

        Ok(SolveOutput::collect(
            &solver,
            library,
            &self.cli.layout(),
            self.cli.seed,
        ))
    }

    fn write_stdout(output: &SolveOutput) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(&mut handle, output).map_err(|e| {
            AlgorithmError::LibraryExport {
                path: PathBuf::from("<stdout>"),
                source: e,
            }
        })?;
        writeln!(handle).map_err(|e| file_system_error("<stdout>", "write", e))
    }

    /// Default solve output path next to the target
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, OUTPUT_SUFFIX)
    }

    /// Default compiled library path next to the target
    pub fn get_library_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, LIBRARY_SUFFIX)
    }

    fn sibling_path(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.json", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
