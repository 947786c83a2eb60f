//! Win and tie detection

use crate::board::Board;
use crate::game::{GameResult, Player};

/// The eight winning lines: rows, then columns, then diagonals
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Mark occupying a full line, if any
pub fn detect_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|(row, col)| board.get(row, col));
        match a {
            Some(player) if b == a && c == a => Some(player),
            _ => None,
        }
    })
}

/// True iff no cell is empty. Says nothing about a winner.
pub fn is_full(board: &Board) -> bool {
    board.empty_cells().next().is_none()
}

/// Result of a board position; a win takes precedence over a full board
pub fn evaluate(board: &Board) -> GameResult {
    match detect_winner(board) {
        Some(player) => GameResult::Won(player),
        None if is_full(board) => GameResult::Tie,
        None => GameResult::Ongoing,
    }
}
