//! Error types for piece loading and search configuration

use std::fmt;
use std::path::PathBuf;

use crate::io::configuration::CONNECTORS_PER_PIECE;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// A connector token could not be parsed
    InvalidConnector {
        /// The offending token as it appeared in the input
        token: String,
        /// Explanation of why the token is malformed
        reason: &'static str,
    },

    /// A piece line does not carry exactly four connector tokens
    TokenCount {
        /// 1-based line number in the piece source
        line: usize,
        /// Number of tokens actually found
        found: usize,
    },

    /// A piece line contains a malformed connector
    InvalidPiece {
        /// 1-based line number in the piece source
        line: usize,
        /// The connector error raised for that line
        source: Box<PuzzleError>,
    },

    /// The number of pieces does not match the number of empty board slots
    ///
    /// Only raised under [`PieceCountPolicy::Exact`](crate::algorithm::search::PieceCountPolicy).
    PieceCount {
        /// Empty slots available on the starting board
        expected: usize,
        /// Pieces supplied to the search
        found: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnector { token, reason } => {
                write!(f, "Invalid connector '{token}': {reason}")
            }
            Self::TokenCount { line, found } => {
                write!(
                    f,
                    "Line {line}: expected {CONNECTORS_PER_PIECE} connectors (left, up, right, down), found {found}"
                )
            }
            Self::InvalidPiece { line, source } => {
                write!(f, "Line {line}: {source}")
            }
            Self::PieceCount { expected, found } => {
                write!(
                    f,
                    "Piece count mismatch: board has {expected} empty slots but {found} pieces were given"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPiece { source, .. } => Some(source.as_ref()),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a 1-based line number to a connector parse failure
pub fn at_line(line: usize, error: PuzzleError) -> PuzzleError {
    PuzzleError::InvalidPiece {
        line,
        source: Box::new(error),
    }
}
