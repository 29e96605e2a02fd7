//! Tests for the scoped placement guard used during backtracking

#[cfg(test)]
mod tests {
    use edgematch::algorithm::placement::Placement;
    use edgematch::spatial::board::Board;
    use edgematch::spatial::connector::Connector;
    use edgematch::spatial::piece::{Piece, PieceId};

    fn piece(id: usize) -> Piece {
        Piece::new(PieceId(id), ["a>", "b>", "c>", "d>"].map(|t| t.parse::<Connector>().unwrap()))
    }

    // Tests that dropping the guard restores the board
    // Verified by removing the Drop implementation
    #[test]
    fn test_drop_undoes_placement() {
        let mut board = Board::new(2, 2);
        board.add_piece(piece(0));
        let before = board.clone();

        {
            let placement = Placement::place(&mut board, piece(1)).unwrap();
            assert_eq!(placement.slot(), (0, 1));
            assert_eq!(placement.board().filled_count(), 2);
        }

        assert_eq!(board, before);
    }

    // Tests that nested guards unwind in stack order
    #[test]
    fn test_nested_placements_unwind() {
        let mut board = Board::new(2, 1);
        {
            let mut outer = Placement::place(&mut board, piece(0)).unwrap();
            {
                let inner = Placement::place(outer.board_mut(), piece(1)).unwrap();
                assert!(inner.board().is_full());
                let mut full = inner.board().clone();
                assert!(Placement::place(&mut full, piece(2)).is_none());
            }
            assert_eq!(outer.board().filled_count(), 1);
        }
        assert!(board.is_empty());
    }

    // Tests that only the guarded slot is cleared, even with a later slot already filled
    // Verified by clearing the last filled slot on drop
    #[test]
    fn test_guard_clears_its_own_slot() {
        let mut board = Board::from_rows(&[vec![None, None, Some(piece(9))]]).unwrap();
        {
            let placement = Placement::place(&mut board, piece(0)).unwrap();
            assert_eq!(placement.slot(), (0, 0));
        }
        assert_eq!(board.get(0, 2), Some(&piece(9)));
        assert_eq!(board.filled_count(), 1);
    }
}
