//! Square pieces with one connector per side and quarter-turn rotation
//!
//! Sides are stored in clockwise order (left, up, right, down), which turns
//! rotation into a cyclic shift of the connector array.

use std::fmt;

use crate::spatial::connector::Connector;

/// One edge of a square piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left edge
    Left,
    /// Top edge
    Up,
    /// Right edge
    Right,
    /// Bottom edge
    Down,
}

impl Side {
    /// All sides in clockwise order, matching the piece file column order
    pub const ALL: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    /// Position of the side in clockwise order
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Up => 1,
            Self::Right => 2,
            Self::Down => 3,
        }
    }

    /// Side facing this one across a shared edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }

    /// Side this one ends up on after `turns` clockwise quarter turns
    #[must_use]
    pub const fn rotated_clockwise(self, turns: i32) -> Self {
        match (self.index() + turns.rem_euclid(4) as usize) % 4 {
            0 => Self::Left,
            1 => Self::Up,
            2 => Self::Right,
            _ => Self::Down,
        }
    }
}

/// Identity of an input piece, preserved across rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A unit square carrying one connector per side
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    /// Indexed by [`Side::index`]
    connectors: [Connector; 4],
}

impl Piece {
    /// Create a piece from connectors given in left, up, right, down order
    pub const fn new(id: PieceId, connectors: [Connector; 4]) -> Self {
        Self { id, connectors }
    }

    /// Create a piece from named sides
    pub const fn from_sides(
        id: PieceId,
        left: Connector,
        up: Connector,
        right: Connector,
        down: Connector,
    ) -> Self {
        Self::new(id, [left, up, right, down])
    }

    /// Identity of the input piece this value was derived from
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Connector on the given side
    pub const fn connector(&self, side: Side) -> &Connector {
        match side {
            Side::Left => &self.connectors[0],
            Side::Up => &self.connectors[1],
            Side::Right => &self.connectors[2],
            Side::Down => &self.connectors[3],
        }
    }

    /// Connectors in left, up, right, down order
    pub const fn connectors(&self) -> &[Connector; 4] {
        &self.connectors
    }

    /// Left connector
    pub const fn left(&self) -> &Connector {
        self.connector(Side::Left)
    }

    /// Top connector
    pub const fn up(&self) -> &Connector {
        self.connector(Side::Up)
    }

    /// Right connector
    pub const fn right(&self) -> &Connector {
        self.connector(Side::Right)
    }

    /// Bottom connector
    pub const fn down(&self) -> &Connector {
        self.connector(Side::Down)
    }

    /// Check whether `other`, placed against this piece's `side`, joins it
    pub fn fits(&self, other: &Self, side: Side) -> bool {
        self.connector(side)
            .is_compatible(other.connector(side.opposite()))
    }

    /// Rotate clockwise by `turns` quarter turns
    ///
    /// Turns are reduced modulo 4, negative values rotate counter-clockwise.
    /// One turn moves the left connector up, up to right, right to down and
    /// down to left.
    #[must_use]
    pub fn rotated_clockwise(&self, turns: i32) -> Self {
        let mut connectors = self.connectors.clone();
        connectors.rotate_right(turns.rem_euclid(4) as usize);
        Self {
            id: self.id,
            connectors,
        }
    }

    /// All four rotations, indexed by clockwise turn count
    pub fn orientations(&self) -> [Self; 4] {
        [0, 1, 2, 3].map(|turns| self.rotated_clockwise(turns))
    }

    /// Compare connectors only, ignoring identity
    pub fn has_same_edges(&self, other: &Self) -> bool {
        self.connectors == other.connectors
    }

    /// Length of the longest connector label
    pub fn longest_label(&self) -> usize {
        self.connectors
            .iter()
            .map(|connector| connector.label().char_len())
            .max()
            .unwrap_or(0)
    }
}
