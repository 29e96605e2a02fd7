/// Seeded generation of solvable instances
pub mod generator;
/// Per-piece orientation tables
pub mod orientation;
/// Scoped placement guard for backtracking
pub mod placement;
/// Recursive backtracking search and its configuration
pub mod search;
