use crate::*;
pub use capture::*;
pub use status::*;
pub use validator::*;

mod capture;
mod status;
mod validator;

/// Number of opposing discs bracketed by `color` when walking from `origin` in `direction`.
///
/// Zero unless the walk crosses at least one opposing disc and then lands on a disc of
/// `color` without leaving the board or touching an empty cell.
fn flank_length(board: &Board, origin: Coord2, direction: Direction, color: Color) -> usize {
    let mut run = 0;
    for coords in board.iter_ray(origin, direction) {
        match board[coords].color() {
            Some(found) if found == color => return run,
            Some(_) => run += 1,
            None => return 0,
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flank_requires_own_disc_at_far_end() {
        let board = Board::from_rows(&[
            "........", "........", "........", ".WWWB...", "........", "........", "........",
            "........",
        ])
        .unwrap();

        assert_eq!(flank_length(&board, (3, 0), (0, 1), Color::Black), 3);
        assert_eq!(flank_length(&board, (3, 0), (0, 1), Color::White), 0);
    }

    #[test]
    fn flank_stops_at_gap_and_edge() {
        let board = Board::from_rows(&[
            "........", "........", "........", ".W.B....", "......WW", "........", "........",
            "........",
        ])
        .unwrap();

        assert_eq!(flank_length(&board, (3, 0), (0, 1), Color::Black), 0);
        assert_eq!(flank_length(&board, (4, 5), (0, 1), Color::Black), 0);
    }

    #[test]
    fn adjacent_own_disc_brackets_nothing() {
        let board = Board::standard();
        assert_eq!(flank_length(&board, (2, 4), (1, 0), Color::Black), 0);
    }
}
