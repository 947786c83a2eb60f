//! Game state and move application

use crate::ai::MinimaxAI;
use crate::board::Board;
use crate::error::IllegalMove;
use crate::eval::evaluate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CONSTANTS
// ============================================================================

/// The human always plays X and moves first
pub const HUMAN: Player = Player::X;

/// Mark controlled by the search opponent in games against the algorithm
pub const AUTOMATED: Player = Player::O;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Won(Player),
    Tie,
}

/// A requested move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(player: Player, row: usize, col: usize) -> Self {
        Self { player, row, col }
    }
}

/// What a caller sees after an accepted move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Won { winner: Player, board: Board },
    Tie { board: Board },
    Continue { board: Board, next_player: Player },
}

impl MoveOutcome {
    pub fn board(&self) -> &Board {
        match self {
            MoveOutcome::Won { board, .. }
            | MoveOutcome::Tie { board }
            | MoveOutcome::Continue { board, .. } => board,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }
}

// ============================================================================
// GAME
// ============================================================================

/// A single game: one board, whose turn it is, and the opponent mode
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    against_algorithm: bool,
    result: GameResult,
}

impl Game {
    /// New game with an empty board and X to move
    pub fn new(against_algorithm: bool) -> Self {
        Self {
            board: Board::new(),
            current_player: HUMAN,
            against_algorithm,
            result: GameResult::Ongoing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn against_algorithm(&self) -> bool {
        self.against_algorithm
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Validate and apply a move, then let the search opponent reply if it is
    /// the automated mark's turn. Rejected moves leave the game untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, IllegalMove> {
        self.validate(mv)?;

        self.board.set(mv.row, mv.col, Some(mv.player));
        if let Some(outcome) = self.conclude() {
            return Ok(outcome);
        }
        self.current_player = self.current_player.opponent();

        if self.against_algorithm && self.current_player == AUTOMATED {
            // A non-terminal board always has an empty cell
            if let Some((row, col)) = MinimaxAI::new(AUTOMATED).best_move(&self.board) {
                tracing::debug!(row, col, "automated reply");
                self.board.set(row, col, Some(AUTOMATED));
                if let Some(outcome) = self.conclude() {
                    return Ok(outcome);
                }
                self.current_player = self.current_player.opponent();
            }
        }

        Ok(MoveOutcome::Continue {
            board: self.board,
            next_player: self.current_player,
        })
    }

    fn validate(&self, mv: Move) -> Result<(), IllegalMove> {
        if !Board::in_bounds(mv.row, mv.col) {
            return Err(IllegalMove::OutOfBounds);
        }
        if self.result != GameResult::Ongoing {
            return Err(IllegalMove::GameOver);
        }
        if self.board.get(mv.row, mv.col).is_some() {
            return Err(IllegalMove::CellTaken);
        }
        if mv.player != self.current_player {
            return Err(IllegalMove::WrongTurn);
        }
        Ok(())
    }

    /// Record the result of the current board; `Some` if the game just ended
    fn conclude(&mut self) -> Option<MoveOutcome> {
        self.result = evaluate(&self.board);
        match self.result {
            GameResult::Ongoing => None,
            GameResult::Won(winner) => Some(MoveOutcome::Won {
                winner,
                board: self.board,
            }),
            GameResult::Tie => Some(MoveOutcome::Tie { board: self.board }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
