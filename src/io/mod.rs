/// Command-line interface and run orchestration
pub mod cli;
/// Puzzle constants and defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Piece file parsing
pub mod loader;
/// Tracing subscriber setup
pub mod logging;
/// Search progress display
pub mod progress;
/// Text rendering of pieces and boards
pub mod render;
