//! Server state management

use tictactoe_core::{GameEngine, InMemoryStore};
use std::sync::Arc;

/// Server-wide shared state
pub struct ServerState {
    pub engine: GameEngine<InMemoryStore>,
}

impl ServerState {
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    /// State backed by a caller-provided store
    pub fn with_store(store: Arc<InMemoryStore>) -> Self {
        Self {
            engine: GameEngine::new(store),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
