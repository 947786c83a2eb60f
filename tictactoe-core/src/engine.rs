//! Game engine: the synchronous API the transport layer calls into

use crate::board::Board;
use crate::error::GameError;
use crate::game::{Game, Move, MoveOutcome, Player};
use crate::id::GameId;
use crate::store::{GameStore, InMemoryStore};
use std::sync::Arc;

/// Creates games and applies moves against an injected store
pub struct GameEngine<S = InMemoryStore> {
    store: Arc<S>,
}

impl<S: GameStore> GameEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Start a game with an empty board and X to move
    pub fn create(&self, against_algorithm: bool) -> GameId {
        let id = self.store.insert(Game::new(against_algorithm));
        tracing::info!(game_id = %id, against_algorithm, "created game");
        id
    }

    pub fn get_board(&self, id: GameId) -> Result<Board, GameError> {
        self.get_game(id).map(|game| *game.board())
    }

    pub fn get_game(&self, id: GameId) -> Result<Game, GameError> {
        self.store.snapshot(id).ok_or(GameError::NotFound(id))
    }

    /// Apply `player`'s move, plus the automated reply when one is due.
    ///
    /// The whole exchange runs under the game's lock.
    pub fn apply_move(
        &self,
        id: GameId,
        player: Player,
        row: usize,
        col: usize,
    ) -> Result<MoveOutcome, GameError> {
        let mv = Move::new(player, row, col);
        let outcome = self
            .store
            .update(id, |game| game.apply_move(mv))
            .ok_or(GameError::NotFound(id))??;

        tracing::debug!(game_id = %id, %player, row, col, terminal = outcome.is_terminal(), "applied move");
        Ok(outcome)
    }
}

impl<S> Clone for GameEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl Default for GameEngine<InMemoryStore> {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalMove;
    use std::thread;

    fn engine() -> GameEngine {
        GameEngine::new(Arc::new(InMemoryStore::with_seed(9)))
    }

    #[test]
    fn test_create_registers_empty_game() {
        let engine = engine();
        let id = engine.create(false);

        assert_eq!(engine.get_board(id).unwrap(), Board::new());
        let game = engine.get_game(id).unwrap();
        assert_eq!(game.current_player(), Player::X);
        assert!(!game.against_algorithm());
        assert_eq!(engine.store().len(), 1);
    }

    #[test]
    fn test_unknown_game() {
        let engine = engine();
        let stranger = GameId::from_random(99);

        assert_eq!(engine.get_board(stranger), Err(GameError::NotFound(stranger)));
        assert_eq!(
            engine.apply_move(stranger, Player::X, 0, 0),
            Err(GameError::NotFound(stranger))
        );
    }

    #[test]
    fn test_get_board_is_idempotent() {
        let engine = engine();
        let id = engine.create(false);
        engine.apply_move(id, Player::X, 2, 0).unwrap();

        assert_eq!(engine.get_board(id).unwrap(), engine.get_board(id).unwrap());
    }

    #[test]
    fn test_illegal_moves() {
        let engine = engine();
        let id = engine.create(false);
        engine.apply_move(id, Player::X, 0, 0).unwrap();
        let before = engine.get_board(id).unwrap();

        assert_eq!(
            engine.apply_move(id, Player::O, 0, 0),
            Err(GameError::IllegalMove(IllegalMove::CellTaken))
        );
        assert_eq!(
            engine.apply_move(id, Player::X, 1, 1),
            Err(GameError::IllegalMove(IllegalMove::WrongTurn))
        );
        assert_eq!(engine.get_board(id).unwrap(), before);
    }

    #[test]
    fn test_games_are_independent() {
        let engine = engine();
        let a = engine.create(false);
        let b = engine.create(true);
        engine.apply_move(a, Player::X, 0, 0).unwrap();

        assert_eq!(engine.get_board(b).unwrap(), Board::new());
        assert_eq!(engine.get_game(a).unwrap().current_player(), Player::O);
        assert_eq!(engine.get_game(b).unwrap().current_player(), Player::X);
    }

    #[test]
    fn test_concurrent_moves_on_one_game() {
        let engine = engine();
        let id = engine.create(false);

        // Eight threads race X onto different cells; only one X move fits this turn
        let accepted: usize = thread::scope(|scope| {
            let handles: Vec<_> = crate::board::CELLS
                .into_iter()
                .take(8)
                .map(|(row, col)| {
                    let engine = engine.clone();
                    scope.spawn(move || engine.apply_move(id, Player::X, row, col).is_ok())
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap() as usize)
                .sum()
        });

        assert_eq!(accepted, 1);
        let board = engine.get_board(id).unwrap();
        assert_eq!(board.count(Player::X), 1);
        assert_eq!(engine.get_game(id).unwrap().current_player(), Player::O);
    }

    #[test]
    fn test_concurrent_games_all_progress() {
        let engine = engine();
        let ids: Vec<_> = (0..8).map(|_| engine.create(true)).collect();

        thread::scope(|scope| {
            for &id in &ids {
                let engine = engine.clone();
                scope.spawn(move || engine.apply_move(id, Player::X, 0, 0).unwrap());
            }
        });

        for id in ids {
            let board = engine.get_board(id).unwrap();
            assert_eq!(board.get(0, 0), Some(Player::X));
            assert_eq!(board.get(1, 1), Some(Player::O));
        }
    }
}
