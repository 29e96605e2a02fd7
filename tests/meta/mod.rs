//! Structural checks on the repository layout

mod coverage;
