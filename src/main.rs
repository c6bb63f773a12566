//! CLI entry point for socket-driven 3D tile generation

use clap::Parser;
use socketwfc::io::cli::{Cli, FileProcessor};
use socketwfc::io::logging::init_logging;

fn main() -> socketwfc::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter())?;
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
