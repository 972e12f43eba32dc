use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the two players, identified by the color of their discs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Black => "Black",
            Self::White => "White",
        })
    }
}

/// Contents of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Black,
    White,
}

impl CellState {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Black => Some(Color::Black),
            Self::White => Some(Color::White),
        }
    }

    pub(crate) const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Black => 'B',
            Self::White => 'W',
        }
    }

    pub(crate) const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '-' => Some(Self::Empty),
            'B' | 'X' | 'b' | 'x' => Some(Self::Black),
            'W' | 'O' | 'w' | 'o' => Some(Self::White),
            _ => None,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Color> for CellState {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }
}
