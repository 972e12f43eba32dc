use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Illegal move, the cell is occupied or captures nothing")]
    IllegalMove,
    #[error("Board shape does not match 8x8")]
    InvalidBoardShape,
    #[error("Unrecognized cell symbol {0:?}")]
    InvalidCell(char),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
