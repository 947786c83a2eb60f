//! 3x3 board with row/column coordinates

use crate::game::Player;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Board side length
pub const BOARD_SIZE: usize = 3;

/// Every cell coordinate in row-major order
pub const CELLS: [(usize, usize); BOARD_SIZE * BOARD_SIZE] = [
    (0, 0), (0, 1), (0, 2),
    (1, 0), (1, 1), (1, 2),
    (2, 0), (2, 1), (2, 2),
];

/// A cell is either empty or holds one player's mark
pub type Cell = Option<Player>;

/// Tic-tac-toe grid, indexed as `[row][col]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Empty board
    pub const fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub const fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Check if a coordinate is on the board
    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Mark at a cell. Panics if the coordinate is off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        CELLS
            .iter()
            .copied()
            .filter(move |&(row, col)| self.cells[row][col].is_none())
    }

    /// Number of cells holding `player`'s mark
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    /// Grid of `""`, `"X"`, `"O"` as exposed to clients
    pub fn to_strings(&self) -> [[&'static str; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
            .map(|row| row.map(|cell| cell.map_or("", Player::as_str)))
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_strings().serialize(serializer)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "---+---+---")?;
            }
            let marks = row.map(|cell| cell.map_or(" ", Player::as_str));
            writeln!(f, " {} | {} | {}", marks[0], marks[1], marks[2])?;
        }
        Ok(())
    }
}

/// Parses the compact `"XO./.X./..O"` form: rows separated by `/`, `.` for empty.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(format!("expected {} rows, got {}", BOARD_SIZE, rows.len()));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(format!("row {} has {} cells", row, chars.len()));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let cell = match ch {
                    'X' => Some(Player::X),
                    'O' => Some(Player::O),
                    '.' => None,
                    other => return Err(format!("unexpected cell {:?}", other)),
                };
                board.set(row, col, cell);
            }
        }
        Ok(board)
    }
}
