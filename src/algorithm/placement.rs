//! Scoped piece placement for backtracking

use crate::spatial::board::{Board, Slot};
use crate::spatial::piece::Piece;

/// A piece placed on a borrowed board, removed again when dropped
///
/// The guard clears exactly the slot it filled, so the board is restored on
/// every exit path of the code holding it.
#[derive(Debug)]
pub struct Placement<'b> {
    board: &'b mut Board,
    slot: Slot,
}

impl<'b> Placement<'b> {
    /// Place `piece` in the first empty slot of `board`
    ///
    /// Returns `None` and leaves the board untouched if it is full.
    pub fn place(board: &'b mut Board, piece: Piece) -> Option<Self> {
        let slot = board.place(piece)?;
        Some(Self { board, slot })
    }

    /// Slot the piece went into
    pub const fn slot(&self) -> Slot {
        self.slot
    }

    /// The board with the piece in place
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Mutable access for deeper placements
    ///
    /// Callers must leave the board as they found it before this guard drops.
    pub fn board_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.take(self.slot);
    }
}
