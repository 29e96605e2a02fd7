//! Exhaustive solver for edge-matching tile puzzles
//!
//! Square pieces carry a labeled, polarized connector on each side. The
//! solver places every piece, in every rotation, into a fixed-size board in
//! row-major order, abandons a branch as soon as two neighbours fail to join,
//! and returns every complete board.

#![forbid(unsafe_code)]

/// Placement search, orientation handling and instance generation
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Connectors, pieces and boards
pub mod spatial;

pub use algorithm::search::{SearchConfig, Solver, solve};
pub use io::error::{PuzzleError, Result};
pub use spatial::{Board, Connector, Piece, PieceId, Polarity, Side};
