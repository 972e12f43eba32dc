use serde::{Deserialize, Serialize};

use crate::*;

/// How the turn moved after a successful placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The opponent moves next.
    Switched,
    /// The opponent has no legal move and passes, the mover plays again.
    Retained,
    /// Neither side has a legal move, the game is over.
    NoMoves,
}

impl TurnOutcome {
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Retained)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::NoMoves)
    }
}

/// Tracks the side to move and applies the pass rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnManager {
    to_move: Color,
}

impl TurnManager {
    pub const fn new(to_move: Color) -> Self {
        Self { to_move }
    }

    pub const fn to_move(&self) -> Color {
        self.to_move
    }

    /// Decides who plays after `mover` has placed a disc on `board`.
    ///
    /// The opponent is checked first; the mover only keeps the turn when the
    /// opponent is stuck.
    pub fn after_move(&mut self, board: &Board, mover: Color) -> TurnOutcome {
        let opponent = mover.opponent();

        let outcome = if has_any_legal_move(board, opponent) {
            self.to_move = opponent;
            TurnOutcome::Switched
        } else if has_any_legal_move(board, mover) {
            self.to_move = mover;
            TurnOutcome::Retained
        } else {
            TurnOutcome::NoMoves
        };

        log::trace!("turn after {} moved: {:?}", mover, outcome);
        outcome
    }
}

impl Default for TurnManager {
    fn default() -> Self {
        Self::new(Color::Black)
    }
}
