//! Exhaustive backtracking search over piece placements
//!
//! The search fills the board in row-major order. At each level it tries
//! every remaining piece in every orientation, drops placements that break an
//! adjacency, and recurses on the pieces still left. One board is shared by
//! the whole call tree; each placement is undone by its guard before the next
//! alternative is tried.

use tracing::{debug, warn};

use crate::algorithm::orientation::{OrientationTable, RotationPolicy};
use crate::algorithm::placement::Placement;
use crate::io::configuration::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIMENSION};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::spatial::board::Board;
use crate::spatial::piece::Piece;

/// When partial boards are checked for adjacency violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Check after every placement and abandon invalid branches at once
    #[default]
    Eager,
    /// Only check full boards; same results, far more work
    AtLeaves,
}

/// How a mismatch between piece count and empty slots is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceCountPolicy {
    /// Reject the input with [`PuzzleError::PieceCount`]
    #[default]
    Exact,
    /// Search anyway: surplus pieces are never placed, a shortfall finds nothing
    Lenient,
}

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Board width in slots
    pub width: usize,
    /// Board height in slots
    pub height: usize,
    /// Pruning strategy
    pub pruning: Pruning,
    /// Which piece rotations become branches
    pub rotations: RotationPolicy,
    /// Piece count checking at the entry point
    pub piece_count: PieceCountPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            pruning: Pruning::default(),
            rotations: RotationPolicy::default(),
            piece_count: PieceCountPolicy::default(),
        }
    }
}

impl SearchConfig {
    /// Default configuration for a board of the given size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check the board dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or above
    /// [`MAX_BOARD_DIMENSION`]
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_BOARD_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_BOARD_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }

    /// Number of slots on the board
    pub const fn slot_count(&self) -> usize {
        self.width * self.height
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Pieces put on the board, including ones removed again by pruning
    pub placements: u64,
    /// Placements abandoned because they broke an adjacency
    pub pruned: u64,
    /// Complete boards found
    pub solutions: u64,
    /// Deepest recursion level reached
    pub max_depth: usize,
}

/// Hooks called while the search runs
///
/// All methods default to doing nothing.
pub trait SearchObserver {
    /// A level of the recursion starts trying the pool piece at `index`
    fn branch_started(&mut self, _depth: usize, _index: usize, _total: usize) {}

    /// Every orientation of the pool piece at `index` has been explored
    fn branch_finished(&mut self, _depth: usize, _index: usize, _total: usize) {}

    /// A complete board was found
    fn solution_found(&mut self, _board: &Board) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SearchObserver for Silent {}

/// Backtracking solver for one board configuration
#[derive(Debug)]
pub struct Solver<O = Silent> {
    config: SearchConfig,
    observer: O,
    stats: SearchStats,
}

impl Solver<Silent> {
    /// Create a solver without progress reporting
    pub const fn new(config: SearchConfig) -> Self {
        Self::with_observer(config, Silent)
    }
}

impl<O: SearchObserver> Solver<O> {
    /// Create a solver that reports to `observer`
    pub const fn with_observer(config: SearchConfig, observer: O) -> Self {
        Self {
            config,
            observer,
            stats: SearchStats {
                placements: 0,
                pruned: 0,
                solutions: 0,
                max_depth: 0,
            },
        }
    }

    /// Configuration in use
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the most recent search
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Give back the observer
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Find every complete board built from `pieces` on an empty board
    ///
    /// # Errors
    ///
    /// Returns an error if the configured board size is invalid, or if the
    /// piece count does not match the slot count under
    /// [`PieceCountPolicy::Exact`]
    pub fn solve(&mut self, pieces: &[Piece]) -> Result<Vec<Board>> {
        self.config.validate()?;
        let board = Board::new(self.config.width, self.config.height);
        self.solve_from(pieces, &board)
    }

    /// Find every complete board reachable by placing `pieces` into the
    /// empty slots of `start`
    ///
    /// `start` is copied; its size overrides the configured one.
    ///
    /// # Errors
    ///
    /// Returns an error if the piece count does not match the number of empty
    /// slots under [`PieceCountPolicy::Exact`]
    pub fn solve_from(&mut self, pieces: &[Piece], start: &Board) -> Result<Vec<Board>> {
        let empty = start.empty_count();
        if pieces.len() != empty {
            match self.config.piece_count {
                PieceCountPolicy::Exact => {
                    return Err(PuzzleError::PieceCount {
                        expected: empty,
                        found: pieces.len(),
                    });
                }
                PieceCountPolicy::Lenient => {
                    warn!(
                        pieces = pieces.len(),
                        empty_slots = empty,
                        "piece count does not match empty slots"
                    );
                }
            }
        }

        self.stats = SearchStats::default();
        let table = OrientationTable::build(pieces, self.config.rotations);
        let pool: Vec<usize> = (0..table.len()).collect();
        let mut board = start.clone();

        debug!(
            pieces = table.len(),
            orientations = table.orientation_count(),
            width = board.width(),
            height = board.height(),
            pruning = ?self.config.pruning,
            "starting search"
        );

        let solutions = self.descend(&table, &pool, &mut board, 0);

        debug!(
            solutions = solutions.len(),
            placements = self.stats.placements,
            pruned = self.stats.pruned,
            max_depth = self.stats.max_depth,
            "search finished"
        );
        Ok(solutions)
    }

    fn descend(
        &mut self,
        table: &OrientationTable,
        pool: &[usize],
        board: &mut Board,
        depth: usize,
    ) -> Vec<Board> {
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if board.is_complete() {
            self.stats.solutions += 1;
            self.observer.solution_found(board);
            return vec![board.clone()];
        }

        let mut found = Vec::new();

        for (position, &piece_index) in pool.iter().enumerate() {
            self.observer.branch_started(depth, position, pool.len());

            for orientation in table.orientations(piece_index) {
                let Some(mut placement) = Placement::place(board, orientation.clone()) else {
                    // Full but not complete: nothing fits anywhere at this level
                    return found;
                };
                self.stats.placements += 1;

                if self.config.pruning == Pruning::Eager && !placement.board().is_valid() {
                    self.stats.pruned += 1;
                    continue;
                }

                let remaining: Vec<usize> = pool
                    .iter()
                    .enumerate()
                    .filter_map(|(other, &index)| (other != position).then_some(index))
                    .collect();
                found.extend(self.descend(table, &remaining, placement.board_mut(), depth + 1));
            }

            self.observer.branch_finished(depth, position, pool.len());
        }

        found
    }
}

/// Find every complete 3×3 board built from `pieces`
///
/// Uses the default [`SearchConfig`].
///
/// # Errors
///
/// Returns [`PuzzleError::PieceCount`] unless exactly nine pieces are given
pub fn solve(pieces: &[Piece]) -> Result<Vec<Board>> {
    Solver::new(SearchConfig::default()).solve(pieces)
}

/// Keep one board per class of whole-board rotations
///
/// Rotating a solved board keeps every adjacency intact, so solutions come in
/// classes of four (square boards) or two (rectangular ones). The first board
/// of each class in input order is kept.
pub fn group_by_board_rotation(boards: &[Board]) -> Vec<Board> {
    let mut representatives: Vec<Board> = Vec::new();
    for board in boards {
        let seen = (0..4)
            .map(|turns| board.rotated_clockwise(turns))
            .any(|rotated| representatives.contains(&rotated));
        if !seen {
            representatives.push(board.clone());
        }
    }
    representatives
}
