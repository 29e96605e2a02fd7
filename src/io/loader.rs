//! Piece file parsing
//!
//! One piece per line, four connector tokens in left, up, right, down order.
//! Blank lines and `#` comments are skipped; piece ids follow line order.

use std::path::Path;

use crate::io::configuration::COMMENT_PREFIX;
use crate::io::error::{PuzzleError, Result, at_line};
use crate::spatial::connector::Connector;
use crate::spatial::piece::{Piece, PieceId};

/// Parse one piece line
///
/// `line_number` is 1-based and only used for error messages.
///
/// # Errors
///
/// Returns an error if the line does not hold exactly four tokens or a token
/// is not a valid connector
pub fn parse_piece(id: PieceId, line_number: usize, line: &str) -> Result<Piece> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [left, up, right, down] = *tokens.as_slice() else {
        return Err(PuzzleError::TokenCount {
            line: line_number,
            found: tokens.len(),
        });
    };

    let parse = |token: &str| {
        token
            .parse::<Connector>()
            .map_err(|error| at_line(line_number, error))
    };
    Ok(Piece::from_sides(
        id,
        parse(left)?,
        parse(up)?,
        parse(right)?,
        parse(down)?,
    ))
}

/// Parse a whole piece file
///
/// # Errors
///
/// Returns the first parse error encountered
pub fn parse_pieces(text: &str) -> Result<Vec<Piece>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
        .enumerate()
        .map(|(id, (line_number, line))| parse_piece(PieceId(id), line_number, line))
        .collect()
}

/// Read and parse a piece file from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse
pub fn load_pieces(path: &Path) -> Result<Vec<Piece>> {
    let text = std::fs::read_to_string(path).map_err(|source| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "read piece file",
        source,
    })?;
    parse_pieces(&text)
}
