//! Fixed-size board of optional piece slots
//!
//! Slots are filled in row-major order and only filled-filled adjacencies are
//! checked, so a partially filled board can be valid. The board owns its
//! pieces; cloning it is a deep copy.

use ndarray::{Array2, ArrayView1, Axis};

use crate::io::configuration::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::piece::{Piece, Side};

/// Grid position as (row, col)
pub type Slot = (usize, usize);

/// A W×H grid of piece slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: Array2<Option<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

impl Board {
    /// Create an empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            slots: Array2::from_elem((height, width), None),
        }
    }

    /// Build a board from rows of optional pieces
    ///
    /// The pieces are cloned, so the new board never shares state with the
    /// caller's grid.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows are empty, or the rows
    /// differ in length
    pub fn from_rows(rows: &[Vec<Option<Piece>>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(invalid_parameter("rows", &0, &"board needs at least one row"));
        };
        let width = first.len();
        if width == 0 {
            return Err(invalid_parameter(
                "rows",
                &0,
                &"board rows need at least one slot",
            ));
        }
        if let Some(ragged) = rows.iter().position(|row| row.len() != width) {
            return Err(invalid_parameter(
                "rows",
                &ragged,
                &format!("row length differs from the first row's {width} slots"),
            ));
        }

        let flat: Vec<Option<Piece>> = rows.iter().flatten().cloned().collect();
        let slots = Array2::from_shape_vec((rows.len(), width), flat)
            .map_err(|error| invalid_parameter("rows", &rows.len(), &error))?;
        Ok(Self { slots })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.slots.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.slots.nrows()
    }

    /// Total number of slots
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Piece at the given slot, if any
    pub fn get(&self, row: usize, col: usize) -> Option<&Piece> {
        self.slots.get((row, col)).and_then(Option::as_ref)
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Option<Piece>>> {
        self.slots.axis_iter(Axis(0))
    }

    /// Filled slots in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Slot, &Piece)> {
        self.slots
            .indexed_iter()
            .filter_map(|(slot, piece)| piece.as_ref().map(|piece| (slot, piece)))
    }

    /// Number of filled slots
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of empty slots
    pub fn empty_count(&self) -> usize {
        self.slot_count() - self.filled_count()
    }

    /// Check whether every slot is filled
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Check whether every slot is empty
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Check every filled-filled adjacency
    ///
    /// Each filled slot is compared against its right and down neighbours;
    /// empty or out-of-bounds neighbours impose no constraint.
    pub fn is_valid(&self) -> bool {
        self.pieces().all(|((row, col), piece)| {
            let right_ok = self
                .get(row, col + 1)
                .is_none_or(|neighbour| piece.fits(neighbour, Side::Right));
            let down_ok = self
                .get(row + 1, col)
                .is_none_or(|neighbour| piece.fits(neighbour, Side::Down));
            right_ok && down_ok
        })
    }

    /// Check that the board is full and every adjacency joins
    pub fn is_complete(&self) -> bool {
        self.is_full() && self.is_valid()
    }

    /// First empty slot in row-major order
    pub fn first_empty_slot(&self) -> Option<Slot> {
        self.slots
            .indexed_iter()
            .find_map(|(slot, piece)| piece.is_none().then_some(slot))
    }

    /// Put a piece in the first empty slot and report where it went
    ///
    /// Returns `None` without touching the board if it is already full.
    pub fn place(&mut self, piece: Piece) -> Option<Slot> {
        let slot = self.first_empty_slot()?;
        let cell = self.slots.get_mut(slot)?;
        *cell = Some(piece);
        Some(slot)
    }

    /// Put a piece in the first empty slot
    ///
    /// Returns false without touching the board if it is already full.
    pub fn add_piece(&mut self, piece: Piece) -> bool {
        self.place(piece).is_some()
    }

    /// Empty the last filled slot in row-major order
    ///
    /// Undoes the most recent [`Board::add_piece`] on a board filled as a
    /// row-major prefix. Does nothing on an empty board.
    pub fn remove_last_piece(&mut self) -> Option<Piece> {
        self.slots
            .iter_mut()
            .filter(|slot| slot.is_some())
            .last()
            .and_then(Option::take)
    }

    /// Empty one specific slot
    pub fn take(&mut self, slot: Slot) -> Option<Piece> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Rotate the whole board clockwise by `turns` quarter turns
    ///
    /// Every piece turns with the board, so a complete board stays complete.
    /// Odd turn counts swap width and height.
    #[must_use]
    pub fn rotated_clockwise(&self, turns: i32) -> Self {
        let mut rotated = self.clone();
        for _ in 0..turns.rem_euclid(4) {
            rotated = rotated.rotated_once();
        }
        rotated
    }

    fn rotated_once(&self) -> Self {
        let (height, width) = (self.height(), self.width());
        // (row, col) moves to (col, height - 1 - row)
        let slots = Array2::from_shape_fn((width, height), |(row, col)| {
            self.slots
                .get((height - 1 - col, row))
                .and_then(Option::as_ref)
                .map(|piece| piece.rotated_clockwise(1))
        });
        Self { slots }
    }
}
