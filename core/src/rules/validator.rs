use alloc::vec::Vec;

use super::flank_length;
use crate::*;

/// Whether `color` may place a disc at `coords`.
///
/// The cell must be empty and at least one direction must bracket a run of
/// opposing discs.
pub fn is_legal_move(board: &Board, coords: Coord2, color: Color) -> bool {
    if !board.is_empty(coords) {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&direction| flank_length(board, coords, direction, color) > 0)
}

pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .iter_empty()
        .any(|coords| is_legal_move(board, coords, color))
}

/// Every legal placement for `color`, in row-major order.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Coord2> {
    board
        .iter_empty()
        .filter(|&coords| is_legal_move(board, coords, color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_moves_for_black() {
        let board = Board::standard();

        assert_eq!(
            legal_moves(&board, Color::Black),
            [(2, 3), (3, 2), (4, 5), (5, 4)]
        );
        assert_eq!(
            legal_moves(&board, Color::White),
            [(2, 4), (3, 5), (4, 2), (5, 3)]
        );
    }

    #[test]
    fn occupied_cells_are_never_legal() {
        let board = Board::standard();

        for coords in board.iter_coords().filter(|&c| !board.is_empty(c)) {
            assert!(!is_legal_move(&board, coords, Color::Black));
            assert!(!is_legal_move(&board, coords, Color::White));
        }
    }

    #[test]
    fn gap_in_the_line_breaks_the_capture() {
        // B W . B : the empty cell means (3,0) brackets nothing to the east
        let board = Board::from_rows(&[
            "........", "........", "........", ".W.B....", "........", "........", "........",
            "........",
        ])
        .unwrap();

        assert!(!is_legal_move(&board, (3, 0), Color::Black));
        assert!(!has_any_legal_move(&board, Color::Black));
    }

    #[test]
    fn diagonal_capture_is_detected() {
        let board = Board::from_rows(&[
            "........", "........", "..B.....", "...W....", "........", "........", "........",
            "........",
        ])
        .unwrap();

        assert!(is_legal_move(&board, (4, 4), Color::Black));
        assert_eq!(legal_moves(&board, Color::Black), [(4, 4)]);
        assert_eq!(legal_moves(&board, Color::White), [(1, 1)]);
    }

    #[test]
    fn empty_board_has_no_moves() {
        let board = Board::empty();
        assert!(!has_any_legal_move(&board, Color::Black));
        assert!(!has_any_legal_move(&board, Color::White));
    }
}
