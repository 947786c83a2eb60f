//! Game registry
//!
//! The store is owned by whoever hosts the engine and handed to it, so there
//! is no process-global state. Each game sits behind its own mutex: moves on
//! different games proceed in parallel, moves on the same game are applied
//! one at a time.

use crate::game::Game;
use crate::id::GameId;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Storage seam for the game engine
pub trait GameStore: Send + Sync {
    /// Register a game under a fresh id that collides with no existing id
    fn insert(&self, game: Game) -> GameId;

    /// Copy of the game as it is now
    fn snapshot(&self, id: GameId) -> Option<Game>;

    /// Run `f` with exclusive access to one game
    fn update<R>(&self, id: GameId, f: impl FnOnce(&mut Game) -> R) -> Option<R>;

    /// Number of registered games
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime in-memory store. Games are never evicted.
pub struct InMemoryStore {
    games: RwLock<FxHashMap<GameId, Arc<Mutex<Game>>>>,
    rng: Mutex<ChaCha8Rng>,
}

impl InMemoryStore {
    /// Store with ids drawn from OS entropy
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Store with a reproducible id sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            games: RwLock::new(FxHashMap::default()),
            rng: Mutex::new(rng),
        }
    }

    fn next_id(&self) -> GameId {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        GameId::from_random(rng.gen())
    }

    fn entry(&self, id: GameId) -> Option<Arc<Mutex<Game>>> {
        let games = self.games.read().unwrap_or_else(PoisonError::into_inner);
        games.get(&id).cloned()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore for InMemoryStore {
    fn insert(&self, game: Game) -> GameId {
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
        let id = loop {
            let id = self.next_id();
            if !games.contains_key(&id) {
                break id;
            }
        };
        games.insert(id, Arc::new(Mutex::new(game)));
        id
    }

    fn snapshot(&self, id: GameId) -> Option<Game> {
        let entry = self.entry(id)?;
        let game = entry.lock().unwrap_or_else(PoisonError::into_inner);
        Some(game.clone())
    }

    fn update<R>(&self, id: GameId, f: impl FnOnce(&mut Game) -> R) -> Option<R> {
        // The map lock is released before the game lock is taken
        let entry = self.entry(id)?;
        let mut game = entry.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut game))
    }

    fn len(&self) -> usize {
        self.games.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
