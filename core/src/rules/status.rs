use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::has_any_legal_move;
use crate::*;

/// Disc count per color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub black: CellCount,
    pub white: CellCount,
}

impl Score {
    pub const fn total(self) -> CellCount {
        self.black + self.white
    }

    pub const fn of(self, color: Color) -> CellCount {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// The color with more discs, `None` on equal counts.
    pub fn leader(self) -> Option<Color> {
        match self.black.cmp(&self.white) {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        }
    }

    pub fn result(self) -> GameResult {
        self.leader().map_or(GameResult::Tie, GameResult::Winner)
    }
}

/// Final standing of a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Winner(Color),
    Tie,
}

impl GameResult {
    pub const fn winner(self) -> Option<Color> {
        match self {
            Self::Winner(color) => Some(color),
            Self::Tie => None,
        }
    }
}

pub fn score(board: &Board) -> Score {
    Score {
        black: board.count(CellState::Black),
        white: board.count(CellState::White),
    }
}

/// The game is over once the board is full or neither side can move.
pub fn is_terminal(board: &Board) -> bool {
    board.is_full()
        || (!has_any_legal_move(board, Color::Black) && !has_any_legal_move(board, Color::White))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_is_not_terminal() {
        let board = Board::standard();

        assert_eq!(score(&board), Score { black: 2, white: 2 });
        assert!(!is_terminal(&board));
    }

    #[test]
    fn full_board_is_terminal() {
        let board = Board::from_rows(&[
            "BBBBBBBB", "BBBBBBBB", "BBBBBBBB", "BBBBBBBB", "WWWWWWWW", "WWWWWWWW", "WWWWWWWW",
            "WWWWWWWW",
        ])
        .unwrap();

        assert!(board.is_full());
        assert!(is_terminal(&board));
        assert_eq!(score(&board).result(), GameResult::Tie);
    }

    #[test]
    fn stalemate_with_empty_cells_is_terminal() {
        // only black discs left, nobody can bracket anything
        let board = Board::from_rows(&[
            "........", "........", "...BB...", "...BB...", "........", "........", "........",
            "........",
        ])
        .unwrap();

        assert!(!board.is_full());
        assert!(is_terminal(&board));
        assert_eq!(score(&board).result(), GameResult::Winner(Color::Black));
    }

    #[test]
    fn leader_follows_higher_count() {
        let score = Score {
            black: 20,
            white: 44,
        };

        assert_eq!(score.leader(), Some(Color::White));
        assert_eq!(score.result().winner(), Some(Color::White));
        assert_eq!(score.of(Color::Black), 20);
        assert_eq!(score.total(), 64);
        assert_eq!(Score { black: 3, white: 3 }.leader(), None);
    }
}
