//! Orientation table: the rotated copies of each input piece the search tries
//!
//! Built once per search so the recursion only ever passes indices around.

use crate::spatial::piece::Piece;

/// Which rotations of a piece the search branches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPolicy {
    /// One branch per rotation whose connector layout differs from the
    /// earlier ones, so symmetric pieces do not produce duplicate boards
    #[default]
    Distinct,
    /// One branch per rotation index, duplicates included
    All,
}

/// Precomputed orientations for every piece of a pool
#[derive(Debug, Clone)]
pub struct OrientationTable {
    entries: Vec<Vec<Piece>>,
}

impl OrientationTable {
    /// Build the table for `pieces`, indexed like the input slice
    pub fn build(pieces: &[Piece], policy: RotationPolicy) -> Self {
        let entries = pieces
            .iter()
            .map(|piece| match policy {
                RotationPolicy::All => piece.orientations().to_vec(),
                RotationPolicy::Distinct => distinct_orientations(piece),
            })
            .collect();
        Self { entries }
    }

    /// Orientations of the piece at `index`, in clockwise turn order
    pub fn orientations(&self, index: usize) -> &[Piece] {
        self.entries.get(index).map_or(&[], Vec::as_slice)
    }

    /// Number of pieces in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table holds no pieces
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of orientations across all pieces
    pub fn orientation_count(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }
}

/// Rotations of `piece` with pairwise different connector layouts
///
/// Keeps the first occurrence in clockwise turn order, so the result always
/// starts with the unrotated piece. A piece has 1, 2 or 4 distinct
/// orientations.
pub fn distinct_orientations(piece: &Piece) -> Vec<Piece> {
    let mut distinct: Vec<Piece> = Vec::with_capacity(4);
    for orientation in piece.orientations() {
        if !distinct.iter().any(|seen| seen.has_same_edges(&orientation)) {
            distinct.push(orientation);
        }
    }
    distinct
}
