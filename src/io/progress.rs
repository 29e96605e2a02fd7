//! Search progress display driven by the solver's observer hooks

use crate::algorithm::search::SearchObserver;
use crate::io::configuration::{MAX_TRACKED_DEPTH, PROGRESS_BAR_WIDTH};
use crate::spatial::board::Board;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the first-level branches of a search
///
/// The bar advances as each top-level piece is exhausted. The message shows
/// where the next level down currently is and how many solutions were found
/// so far.
pub struct SearchProgress {
    bar: ProgressBar,
    /// Current branch position per tracked depth
    positions: Vec<(usize, usize)>,
    solutions: u64,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create a progress display drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a progress display that draws nothing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(
            Some(0),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(PROGRESS_STYLE.clone());
        Self {
            bar,
            positions: vec![(0, 0); MAX_TRACKED_DEPTH + 1],
            solutions: 0,
        }
    }

    /// Solutions seen so far
    pub const fn solutions(&self) -> u64 {
        self.solutions
    }

    /// Number of top-level branches fully explored
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Length of the bar, the size of the top-level piece pool
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn refresh_message(&self) {
        let nested: Vec<String> = self
            .positions
            .iter()
            .skip(1)
            .map(|(index, total)| format!("{}/{total}", index + 1))
            .collect();
        self.bar.set_message(format!(
            "{} | {} solutions",
            nested.join(" "),
            self.solutions
        ));
    }
}

impl SearchObserver for SearchProgress {
    fn branch_started(&mut self, depth: usize, index: usize, total: usize) {
        if depth > MAX_TRACKED_DEPTH {
            return;
        }
        if depth == 0 {
            self.bar.set_length(total as u64);
            self.bar.set_position(index as u64);
        }
        if let Some(slot) = self.positions.get_mut(depth) {
            *slot = (index, total);
        }
        self.refresh_message();
    }

    fn branch_finished(&mut self, depth: usize, index: usize, total: usize) {
        if depth == 0 {
            self.bar.set_length(total as u64);
            self.bar.set_position(index as u64 + 1);
        }
    }

    fn solution_found(&mut self, _board: &Board) {
        self.solutions += 1;
        self.refresh_message();
    }
}
