use core::fmt;
use core::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 8x8 playing grid, addressed by `(row, col)`.
///
/// Accessors panic on out-of-bounds coordinates; callers holding untrusted
/// input go through [`Board::validate_coords`] first. Deserialized boards are
/// shape-checked the same way as [`Board::from_cells`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<CellState>", into = "Array2<CellState>")]
pub struct Board {
    cells: Array2<CellState>,
}

impl Board {
    pub fn empty() -> Self {
        let size = (BOARD_SIZE, BOARD_SIZE);
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    /// Opening layout: White on the main diagonal of the center, Black on the other.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.set((3, 3), Color::White);
        board.set((4, 4), Color::White);
        board.set((3, 4), Color::Black);
        board.set((4, 3), Color::Black);
        board
    }

    pub fn from_cells(cells: Array2<CellState>) -> Result<Self> {
        let board = Self { cells };
        board.validate()?;
        Ok(board)
    }

    /// Parses one string per row, `.` for empty, `B`/`X` for black and `W`/`O` for white.
    /// Whitespace inside a row is ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        if rows.len() != usize::from(BOARD_SIZE) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let mut col = 0usize;
            for symbol in line.chars().filter(|c| !c.is_whitespace()) {
                if col >= usize::from(BOARD_SIZE) {
                    return Err(GameError::InvalidBoardShape);
                }
                let state = CellState::from_symbol(symbol)
                    .ok_or(GameError::InvalidCell(symbol))?;
                board.cells[[row, col]] = state;
                col += 1;
            }
            if col != usize::from(BOARD_SIZE) {
                return Err(GameError::InvalidBoardShape);
            }
        }

        Ok(board)
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (usize::from(BOARD_SIZE), usize::from(BOARD_SIZE));
        if self.cells.dim() != expected {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Bounds check for raw, possibly negative, row/col values.
    pub fn is_in_bounds(row: isize, col: isize) -> bool {
        let size = BOARD_SIZE as isize;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    pub fn get(&self, coords: Coord2) -> CellState {
        self.cells[coords.to_nd_index()]
    }

    /// Places (or recolors) a disc.
    pub fn set(&mut self, coords: Coord2, color: Color) {
        self.cells[coords.to_nd_index()] = color.into();
    }

    pub fn is_empty(&self, coords: Coord2) -> bool {
        self.get(coords).is_empty()
    }

    pub fn iter_ray(&self, origin: Coord2, direction: Direction) -> RayIter {
        self.cells.iter_ray(origin, direction)
    }

    /// All coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
    }

    pub fn iter_empty(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_coords().filter(|&coords| self.is_empty(coords))
    }

    pub fn count(&self, state: CellState) -> CellCount {
        let count = self.cells.iter().filter(|&&cell| cell == state).count();
        // at most 64 cells
        count as CellCount
    }

    pub fn disc_count(&self) -> CellCount {
        TOTAL_CELLS - self.count(CellState::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.disc_count() == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Array2<CellState>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<CellState>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Array2<CellState> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Index<Coord2> for Board {
    type Output = CellState;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
