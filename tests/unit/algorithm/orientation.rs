//! Tests for orientation tables and symmetric piece deduplication

#[cfg(test)]
mod tests {
    use edgematch::algorithm::orientation::{OrientationTable, RotationPolicy, distinct_orientations};
    use edgematch::spatial::connector::Connector;
    use edgematch::spatial::piece::{Piece, PieceId};

    fn piece(id: usize, tokens: [&str; 4]) -> Piece {
        Piece::new(PieceId(id), tokens.map(|token| token.parse::<Connector>().unwrap()))
    }

    // Tests the three possible symmetry classes of a square piece
    // Verified by comparing whole pieces (including id) instead of edges
    #[test]
    fn test_distinct_orientation_counts() {
        let uniform = piece(0, ["a>", "a>", "a>", "a>"]);
        let half_turn = piece(1, ["a>", "b<", "a>", "b<"]);
        let asymmetric = piece(2, ["a>", "b<", "c>", "d<"]);

        assert_eq!(distinct_orientations(&uniform).len(), 1);
        assert_eq!(distinct_orientations(&half_turn).len(), 2);
        assert_eq!(distinct_orientations(&asymmetric).len(), 4);
    }

    #[test]
    fn test_distinct_orientations_start_unrotated() {
        let half_turn = piece(1, ["a>", "b<", "a>", "b<"]);
        let orientations = distinct_orientations(&half_turn);

        assert_eq!(orientations.first(), Some(&half_turn));
        assert_eq!(orientations.get(1), Some(&half_turn.rotated_clockwise(1)));
    }

    #[test]
    fn test_table_respects_policy() {
        let pieces = vec![
            piece(0, ["a>", "a>", "a>", "a>"]),
            piece(1, ["a>", "b<", "c>", "d<"]),
        ];

        let distinct = OrientationTable::build(&pieces, RotationPolicy::Distinct);
        let all = OrientationTable::build(&pieces, RotationPolicy::All);

        assert_eq!(distinct.len(), 2);
        assert_eq!(distinct.orientations(0).len(), 1);
        assert_eq!(distinct.orientation_count(), 5);
        assert_eq!(all.orientation_count(), 8);
        assert!(all.orientations(5).is_empty());
        assert!(!all.is_empty());
        assert_eq!(RotationPolicy::default(), RotationPolicy::Distinct);
    }
}
