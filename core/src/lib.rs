//! Rules engine for Reversi (Othello) on the standard 8x8 board.
//!
//! The engine only deals in data: a host asks a [`GameSession`] to play a
//! move and renders the returned [`MoveOutcome`] however it likes.

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use rules::*;
pub use turn::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod rules;
mod turn;
mod types;

/// Result of a successful [`GameSession::attempt_move`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Discs recolored by the move, not including the placed disc.
    pub flipped: CaptureSet,
    /// Side to move next; unchanged from the mover when the game just ended.
    pub next_color: Color,
    pub turn: TurnOutcome,
    pub terminal: bool,
    pub score: Score,
}

impl MoveOutcome {
    /// Whether the opponent had to pass.
    pub const fn opponent_passed(&self) -> bool {
        self.turn.is_pass()
    }
}

/// Shorthand for [`GameSession::new`].
pub fn new_session() -> GameSession {
    GameSession::new()
}
