//! Minefield representation.
//!
//! This module contains:
//! - The cell states a board is made of
//! - Random bomb placement
//! - Position validation and cell queries
//! - Bomb masking for values leaving the engine

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// State of a single cell.
///
/// `Empty` and `BombHidden` render to the same symbol so a masked board
/// gives nothing away, but they stay distinct here: win detection only
/// ever looks for `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A bomb, as stored
    Bomb,
    /// A bomb after masking
    BombHidden,
    /// A safe cell that has not been revealed yet
    Empty,
    /// A safe cell the player has uncovered
    Revealed,
}

impl Cell {
    /// External symbol for this cell
    pub fn symbol(&self) -> &'static str {
        match self {
            Cell::Bomb => "X",
            Cell::BombHidden | Cell::Empty => "-",
            Cell::Revealed => "0",
        }
    }

    /// Parse an external symbol. `"-"` always reads back as `Empty`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "X" => Some(Cell::Bomb),
            "-" => Some(Cell::Empty),
            "0" => Some(Cell::Revealed),
            _ => None,
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        Cell::from_symbol(&symbol)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown cell symbol {:?}", symbol)))
    }
}

/// Errors raised while building a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size must be greater than zero")]
    ZeroSize,

    #[error("board of size {size} cannot hold {bombs} bombs")]
    TooManyBombs { size: usize, bombs: usize },

    #[error("board must be square, row {row} has {len} cells instead of {size}")]
    NotSquare { row: usize, len: usize, size: usize },
}

/// A square grid of cells.
///
/// Serializes as an array of rows of cell symbols. Decoding rejects grids
/// that are not square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<Cell>>", try_from = "Vec<Vec<Cell>>")]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a `size` x `size` board with every cell `Empty`
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        Ok(Self {
            cells: vec![vec![Cell::Empty; size]; size],
        })
    }

    /// Create a board with `bombs` bombs placed uniformly at random.
    ///
    /// Bomb positions are distinct linear indices in `0..size*size`, mapped
    /// to `(index / size, index % size)`.
    pub fn create<R: Rng>(size: usize, bombs: usize, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Self::empty(size)?;
        let cell_count = size
            .checked_mul(size)
            .ok_or(BoardError::TooManyBombs { size, bombs })?;
        if bombs > cell_count {
            return Err(BoardError::TooManyBombs { size, bombs });
        }

        for position in index::sample(rng, cell_count, bombs) {
            board.cells[position / size][position % size] = Cell::Bomb;
        }

        Ok(board)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Number of cells in the given state
    pub fn count(&self, state: Cell) -> usize {
        self.cells().filter(|&&cell| cell == state).count()
    }

    /// Copy of this board with every `Bomb` turned into `BombHidden`
    pub fn mask_bombs(&self) -> Board {
        let cells = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| match cell {
                        Cell::Bomb => Cell::BombHidden,
                        other => other,
                    })
                    .collect()
            })
            .collect();
        Board { cells }
    }

    /// Whether `(row, col)` lies on the board
    pub fn is_valid_position(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size()
    }

    /// Whether the cell at `(row, col)` is in `state`.
    ///
    /// Panics if the position is off the board; check with
    /// [`Board::is_valid_position`] first.
    pub fn cell_is(&self, row: usize, col: usize, state: Cell) -> bool {
        self.cells[row][col] == state
    }

    /// Set the cell at `(row, col)`. Panics if the position is off the board.
    pub fn set_cell(&mut self, row: usize, col: usize, state: Cell) {
        self.cells[row][col] = state;
    }

    /// Whether any safe cell is still unrevealed
    pub fn has_empty_cell(&self) -> bool {
        self.cells().any(|&cell| cell == Cell::Empty)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardError;

    fn try_from(cells: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        let size = cells.len();
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        if let Some((row, cells)) = cells.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(BoardError::NotSquare {
                row,
                len: cells.len(),
                size,
            });
        }
        Ok(Self { cells })
    }
}
