//! Puzzle data model
//!
//! This module contains the value types the search works on:
//! - Connectors and their compatibility rule
//! - Pieces, sides and rotation
//! - The board and its adjacency checks

/// Board state, validity and whole-board rotation
pub mod board;
/// Connector labels and polarity
pub mod connector;
/// Pieces, sides and quarter-turn rotation
pub mod piece;

pub use board::Board;
pub use connector::{Connector, Polarity};
pub use piece::{Piece, PieceId, Side};
