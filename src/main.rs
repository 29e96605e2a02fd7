//! CLI entry point for the edge-matching puzzle solver

use clap::Parser;
use edgematch::io::cli::{Cli, PuzzleRunner};
use edgematch::io::logging;

fn main() -> edgematch::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    PuzzleRunner::new(cli).run_and_print()
}
