//! Puzzle constants and runtime configuration defaults

// Board defaults
/// Default board width in slots
pub const DEFAULT_BOARD_WIDTH: usize = 3;
/// Default board height in slots
pub const DEFAULT_BOARD_HEIGHT: usize = 3;

// The search is exponential in the slot count; anything past this never finishes
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 16;

// Piece file format
/// Piece file read when no target is given
pub const DEFAULT_PIECE_FILE: &str = "pieces.txt";
/// Trailing marker of a head connector
pub const HEAD_MARKER: char = '>';
/// Trailing marker of a tail connector
pub const TAIL_MARKER: char = '<';
/// Lines starting with this prefix are ignored by the loader
pub const COMMENT_PREFIX: char = '#';
/// Connector tokens per piece line
pub const CONNECTORS_PER_PIECE: usize = 4;

// Progress bar display settings
/// Deepest recursion level that gets progress updates
pub const MAX_TRACKED_DEPTH: usize = 1;
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

// Logging
/// Log filter used when `RUST_LOG` is unset and no verbosity flag is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Generator defaults
/// Fixed seed for reproducible instance generation
pub const DEFAULT_SEED: u64 = 42;
/// Distinct internal labels used by the generator when unspecified
pub const DEFAULT_LABEL_COUNT: usize = 4;
