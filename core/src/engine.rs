use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    InProgress,
    Terminal,
}

impl SessionState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminal)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Restorable snapshot of a game: the grid and the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,
    pub to_move: Color,
}

impl Position {
    pub fn standard() -> Self {
        Self {
            board: Board::standard(),
            to_move: Color::Black,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.board.validate()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}

/// A single game between Black and White.
///
/// All mutation goes through [`GameSession::attempt_move`] and
/// [`GameSession::reset`]; independent sessions share nothing. Serialized as
/// its [`Position`] and restored through [`GameSession::from_position`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Position", into = "Position")]
pub struct GameSession {
    board: Board,
    turn: TurnManager,
    state: SessionState,
    score: Score,
}

impl GameSession {
    pub fn new() -> Self {
        let board = Board::standard();
        let score = score(&board);
        Self {
            board,
            turn: TurnManager::new(Color::Black),
            state: Default::default(),
            score,
        }
    }

    /// Resumes play from an arbitrary position.
    ///
    /// A side to move without a legal placement passes straight away, and a
    /// position with no moves for either side starts out terminal.
    pub fn from_position(position: Position) -> Result<Self> {
        position.validate()?;
        let Position { board, to_move } = position;

        let state = if is_terminal(&board) {
            SessionState::Terminal
        } else {
            SessionState::InProgress
        };

        let to_move = if state.is_terminal() || has_any_legal_move(&board, to_move) {
            to_move
        } else {
            log::debug!("{} cannot move in restored position, passing", to_move);
            to_move.opponent()
        };

        let score = score(&board);
        Ok(Self {
            board,
            turn: TurnManager::new(to_move),
            state,
            score,
        })
    }

    pub fn position(&self) -> Position {
        Position {
            board: self.board.clone(),
            to_move: self.to_move(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.turn.to_move()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Final standing, only available once the game has ended.
    pub fn result(&self) -> Option<GameResult> {
        self.is_terminal().then(|| self.score.result())
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.board.get(coords)
    }

    /// Legal placements for `color`, e.g. for move hints. Empty once the game is over.
    pub fn legal_moves(&self, color: Color) -> Vec<Coord2> {
        if self.is_terminal() {
            return Vec::new();
        }
        legal_moves(&self.board, color)
    }

    /// Whether the side to move may play at `coords`.
    pub fn is_legal_move(&self, coords: Coord2) -> Result<bool> {
        let coords = self.board.validate_coords(coords)?;
        if self.is_terminal() {
            return Ok(false);
        }
        Ok(is_legal_move(&self.board, coords, self.to_move()))
    }

    /// Plays the side to move at `coords`.
    ///
    /// Out-of-range coordinates are rejected before any rule is consulted. On
    /// any error the session is left untouched.
    pub fn attempt_move(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        let mover = self.turn.to_move();
        if !is_legal_move(&self.board, coords, mover) {
            return Err(GameError::IllegalMove);
        }

        let flipped = apply_move(&mut self.board, coords, mover);
        self.score = score(&self.board);

        let turn = self.turn.after_move(&self.board, mover);
        if turn.is_final() {
            self.end_game();
        }

        Ok(MoveOutcome {
            flipped,
            next_color: self.turn.to_move(),
            turn,
            terminal: self.is_terminal(),
            score: self.score,
        })
    }

    /// Starts a fresh game in place.
    pub fn reset(&mut self) {
        *self = Self::new();
        log::debug!("Session reset");
    }

    fn end_game(&mut self) {
        if self.state.is_terminal() {
            return;
        }

        debug_assert!(is_terminal(&self.board));
        self.state = SessionState::Terminal;
        log::info!(
            "Game over, black {} white {}: {:?}",
            self.score.black,
            self.score.white,
            self.score.result()
        );
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_terminal() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl TryFrom<Position> for GameSession {
    type Error = GameError;

    fn try_from(position: Position) -> Result<Self> {
        Self::from_position(position)
    }
}

impl From<GameSession> for Position {
    fn from(session: GameSession) -> Self {
        Position {
            board: session.board,
            to_move: session.turn.to_move(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
