//! Text rendering of pieces and boards
//!
//! A piece is drawn as a bordered square. The up and down connectors run
//! vertically from the top and to the bottom edge, the left and right
//! connectors share the middle row. Every square on a board uses the same
//! size so rows line up.

use std::fmt;

use crate::spatial::board::Board;
use crate::spatial::connector::Connector;
use crate::spatial::piece::Piece;

/// Square size parameter for a standalone piece
pub fn piece_cell_size(piece: &Piece) -> usize {
    piece.longest_label() + 2
}

/// Square size parameter shared by every slot of a board
pub fn board_cell_size(board: &Board) -> usize {
    board
        .pieces()
        .map(|(_, piece)| piece.longest_label() + 1)
        .max()
        .unwrap_or(0)
}

/// Render one slot as `2 * size + 5` lines of `2 * size + 5` characters
pub fn render_slot(piece: Option<&Piece>, size: usize) -> Vec<String> {
    let inner = 2 * size + 3;
    let half = inner / 2;
    let border = format!("+{}+", "-".repeat(inner));

    let Some(piece) = piece else {
        let blank = format!("|{}|", " ".repeat(inner));
        let mut lines = Vec::with_capacity(inner + 2);
        lines.push(border.clone());
        lines.extend(std::iter::repeat_n(blank, inner));
        lines.push(border);
        return lines;
    };

    let column = |ch: char| format!("|{pad}{ch}{pad}|", pad = " ".repeat(half));
    let up = leading_marker(piece.up());
    let down = trailing_marker(piece.down());
    let left = leading_marker(piece.left());
    let right = trailing_marker(piece.right());
    let gap = inner.saturating_sub(left.chars().count() + right.chars().count());

    let mut lines = Vec::with_capacity(inner + 2);
    lines.push(border.clone());
    lines.extend(up.chars().map(&column));
    lines.extend(std::iter::repeat_n(column(' '), (size + 1).saturating_sub(up.chars().count())));
    lines.push(format!("|{left}{}{right}|", " ".repeat(gap)));
    lines.extend(std::iter::repeat_n(column(' '), (size + 1).saturating_sub(down.chars().count())));
    lines.extend(down.chars().map(&column));
    lines.push(border);
    lines
}

/// Render a piece on its own
pub fn render_piece(piece: &Piece) -> String {
    render_slot(Some(piece), piece_cell_size(piece)).join("\n")
}

/// Render a board, slots side by side, one line per text row
pub fn render_board(board: &Board) -> String {
    let size = board_cell_size(board);
    let mut out = String::new();
    for row in board.rows() {
        let squares: Vec<Vec<String>> = row
            .iter()
            .map(|slot| render_slot(slot.as_ref(), size))
            .collect();
        let line_count = squares.first().map_or(0, Vec::len);
        for line in 0..line_count {
            for square in &squares {
                if let Some(text) = square.get(line) {
                    out.push_str(text);
                }
            }
            out.push('\n');
        }
    }
    out
}

fn leading_marker(connector: &Connector) -> String {
    format!("{}{}", connector.polarity(), connector.label())
}

fn trailing_marker(connector: &Connector) -> String {
    format!("{}{}", connector.label(), connector.polarity())
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_piece(self))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
