//! Command-line interface: load a piece file, search, report

use crate::algorithm::orientation::RotationPolicy;
use crate::algorithm::search::{
    PieceCountPolicy, Pruning, SearchConfig, SearchStats, Solver, group_by_board_rotation,
};
use crate::io::configuration::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_PIECE_FILE};
use crate::io::error::Result;
use crate::io::loader::load_pieces;
use crate::io::progress::SearchProgress;
use crate::spatial::board::Board;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "edgematch")]
#[command(
    author,
    version,
    about = "Find every arrangement of an edge-matching tile puzzle"
)]
/// Command-line arguments for the solver
// Each switch maps to one independent search option
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Piece file: one piece per line, connectors in left, up, right, down order
    #[arg(value_name = "PIECES", default_value = DEFAULT_PIECE_FILE)]
    pub target: PathBuf,

    /// Board width in slots
    #[arg(short = 'w', long, default_value_t = DEFAULT_BOARD_WIDTH)]
    pub width: usize,

    /// Board height in slots
    #[arg(short = 'H', long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    pub height: usize,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Print every solution board
    #[arg(short, long)]
    pub show: bool,

    /// Validate only full boards instead of every placement
    #[arg(long)]
    pub no_prune: bool,

    /// Branch on every rotation, even ones identical to an earlier rotation
    #[arg(long)]
    pub all_rotations: bool,

    /// Search even when the piece count does not match the board size
    #[arg(long)]
    pub lenient: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Search configuration selected by the flags
    pub const fn search_config(&self) -> SearchConfig {
        SearchConfig {
            width: self.width,
            height: self.height,
            pruning: if self.no_prune {
                Pruning::AtLeaves
            } else {
                Pruning::Eager
            },
            rotations: if self.all_rotations {
                RotationPolicy::All
            } else {
                RotationPolicy::Distinct
            },
            piece_count: if self.lenient {
                PieceCountPolicy::Lenient
            } else {
                PieceCountPolicy::Exact
            },
        }
    }
}

/// Outcome of one solver run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Every complete board found
    pub solutions: Vec<Board>,
    /// Solutions that differ by more than a whole-board rotation
    pub distinct_arrangements: usize,
    /// Search counters
    pub stats: SearchStats,
    /// Wall time spent searching
    pub elapsed: Duration,
}

impl RunReport {
    /// One-line summary in the form printed after a run
    pub fn summary(&self) -> String {
        format!(
            "{} solutions found in {:.2} seconds ({} distinct up to rotation)",
            self.solutions.len(),
            self.elapsed.as_secs_f64(),
            self.distinct_arrangements
        )
    }
}

/// Runs the solver on the piece file named by the CLI arguments
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments in use
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Load the pieces and search
    ///
    /// # Errors
    ///
    /// Returns an error if the piece file cannot be read or parsed, or the
    /// search configuration is rejected
    pub fn run(&self) -> Result<RunReport> {
        let pieces = load_pieces(&self.cli.target)?;
        info!(
            pieces = pieces.len(),
            path = %self.cli.target.display(),
            "loaded piece file"
        );

        let config = self.cli.search_config();
        let progress = if self.cli.should_show_progress() {
            SearchProgress::new()
        } else {
            SearchProgress::hidden()
        };

        let start = Instant::now();
        let mut solver = Solver::with_observer(config, progress);
        let result = solver.solve(&pieces);
        let elapsed = start.elapsed();
        let stats = *solver.stats();
        solver.into_observer().finish();
        let solutions = result?;

        let report = RunReport {
            distinct_arrangements: group_by_board_rotation(&solutions).len(),
            solutions,
            stats,
            elapsed,
        };
        info!(
            solutions = report.solutions.len(),
            placements = report.stats.placements,
            pruned = report.stats.pruned,
            "search complete"
        );
        Ok(report)
    }

    /// Run and print the report to stdout
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PuzzleRunner::run`]
    // The report is the program's output
    #[allow(clippy::print_stdout)]
    pub fn run_and_print(&self) -> Result<()> {
        let report = self.run()?;
        if self.cli.show {
            for (index, board) in report.solutions.iter().enumerate() {
                println!("Solution {}:", index + 1);
                println!("{board}");
            }
        }
        println!("{}", report.summary());
        Ok(())
    }
}
