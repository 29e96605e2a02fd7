//! Tests for text rendering of pieces and boards

#[cfg(test)]
mod tests {
    use edgematch::io::render::{
        board_cell_size, piece_cell_size, render_board, render_piece, render_slot,
    };
    use edgematch::spatial::board::Board;
    use edgematch::spatial::connector::Connector;
    use edgematch::spatial::piece::{Piece, PieceId};

    fn piece() -> Piece {
        Piece::from_sides(
            PieceId(0),
            Connector::head("ab"),
            Connector::tail("up"),
            Connector::tail("cd"),
            Connector::head("dn"),
        )
    }

    // Tests that every rendered slot is a square of 2 * size + 5 characters
    // Verified by dropping the padding rows below the middle line
    #[test]
    fn test_slot_is_square() {
        for size in [2, 3, 6] {
            let lines = render_slot(Some(&piece()), size);
            assert_eq!(lines.len(), 2 * size + 5);
            assert!(lines.iter().all(|line| line.chars().count() == 2 * size + 5));

            let blank = render_slot(None, size);
            assert_eq!(blank.len(), 2 * size + 5);
            assert!(blank.iter().all(|line| line.chars().count() == 2 * size + 5));
        }
    }

    // Tests marker placement for all four sides
    // Verified by writing the down connector marker first
    #[test]
    fn test_piece_layout() {
        let rendered = render_piece(&piece());
        let lines: Vec<&str> = rendered.lines().collect();
        let size = piece_cell_size(&piece());
        assert_eq!(size, 4);

        assert_eq!(lines.first(), Some(&"+-----------+"));
        assert_eq!(lines.get(1), Some(&"|     <     |"));
        assert_eq!(lines.get(2), Some(&"|     u     |"));
        assert_eq!(lines.get(3), Some(&"|     p     |"));
        assert_eq!(lines.get(size + 2), Some(&"|>ab     cd<|"));
        assert_eq!(lines.get(2 * size + 1), Some(&"|     d     |"));
        assert_eq!(lines.get(2 * size + 2), Some(&"|     n     |"));
        assert_eq!(lines.get(2 * size + 3), Some(&"|     >     |"));
        assert_eq!(lines.last(), Some(&"+-----------+"));
    }

    #[test]
    fn test_board_rows_line_up() {
        let mut board = Board::new(2, 2);
        board.add_piece(piece());
        board.add_piece(piece().rotated_clockwise(1));
        board.add_piece(piece().rotated_clockwise(2));

        let size = board_cell_size(&board);
        assert_eq!(size, 3);

        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2 * (2 * size + 5));
        assert!(lines.iter().all(|line| line.chars().count() == 2 * (2 * size + 5)));
        assert_eq!(rendered, board.to_string());
    }

    #[test]
    fn test_empty_board_renders_blank_slots() {
        let board = Board::new(1, 1);
        let rendered = render_board(&board);

        assert_eq!(board_cell_size(&board), 0);
        assert_eq!(rendered.lines().count(), 5);
        assert!(!rendered.contains('>'));
    }

    #[test]
    fn test_display_matches_render() {
        assert_eq!(piece().to_string(), render_piece(&piece()));
    }
}
