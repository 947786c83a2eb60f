//! Tic-Tac-Toe Core - Game engine and minimax opponent
//!
//! This crate provides the core game logic:
//! - 3x3 board representation
//! - Win and tie detection
//! - Per-game state and move validation
//! - Exhaustive minimax opponent
//! - Injectable game store with per-game locking

pub mod board;
pub mod error;
pub mod game;
pub mod eval;
pub mod ai;
pub mod id;
pub mod store;
pub mod engine;

// Re-exports for convenient access
pub use board::{Board, Cell, BOARD_SIZE, CELLS};
pub use error::{GameError, IllegalMove, ParseGameIdError};
pub use game::{Game, GameResult, Move, MoveOutcome, Player, AUTOMATED, HUMAN};
pub use eval::{detect_winner, evaluate, is_full, LINES};
pub use ai::{choose_move, minimax, MinimaxAI};
pub use id::GameId;
pub use store::{GameStore, InMemoryStore};
pub use engine::GameEngine;
