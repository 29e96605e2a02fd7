//! Tests for the search progress observer

#[cfg(test)]
mod tests {
    use edgematch::algorithm::search::{SearchConfig, SearchObserver, Solver};
    use edgematch::io::progress::SearchProgress;
    use edgematch::spatial::board::Board;
    use edgematch::spatial::connector::Connector;
    use edgematch::spatial::piece::{Piece, PieceId};

    // Tests that only top-level branches move the bar, and that finishing one
    // counts it as done
    // Verified by updating the position at every depth
    #[test]
    fn test_top_level_branches_drive_position() {
        let mut progress = SearchProgress::hidden();

        progress.branch_started(0, 2, 9);
        assert_eq!(progress.length(), Some(9));
        assert_eq!(progress.position(), 2);

        progress.branch_started(1, 5, 8);
        progress.branch_started(4, 1, 5);
        assert_eq!(progress.length(), Some(9));
        assert_eq!(progress.position(), 2);

        progress.branch_finished(1, 5, 8);
        assert_eq!(progress.position(), 2);
        progress.branch_finished(0, 2, 9);
        assert_eq!(progress.position(), 3);
        progress.finish();
    }

    #[test]
    fn test_counts_solutions() {
        let mut progress = SearchProgress::hidden();
        let board = Board::new(1, 1);

        progress.solution_found(&board);
        progress.solution_found(&board);
        assert_eq!(progress.solutions(), 2);
    }

    #[test]
    fn test_observes_real_search() {
        let pieces = vec![
            Piece::from_sides(
                PieceId(0),
                Connector::head("a"),
                Connector::head("b"),
                Connector::head("join"),
                Connector::head("c"),
            ),
            Piece::from_sides(
                PieceId(1),
                Connector::tail("join"),
                Connector::head("d"),
                Connector::head("e"),
                Connector::head("f"),
            ),
        ];
        let mut solver = Solver::with_observer(SearchConfig::with_size(2, 1), SearchProgress::hidden());
        let solutions = solver.solve(&pieces).unwrap();
        let progress = solver.into_observer();

        assert_eq!(progress.solutions(), solutions.len() as u64);
        // The last top-level branch counts as done once the search returns
        assert_eq!(progress.length(), Some(2));
        assert_eq!(progress.position(), 2);
        progress.finish();
    }
}
