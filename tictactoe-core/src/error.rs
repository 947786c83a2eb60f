//! Error types surfaced to the orchestration layer

use crate::id::GameId;

/// Reasons a move is rejected. The game is left unmodified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("Cell already taken")]
    CellTaken,

    #[error("Not your turn")]
    WrongTurn,

    #[error("Game is already over")]
    GameOver,

    #[error("Cell out of bounds")]
    OutOfBounds,
}

/// Errors returned by the game engine
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Game not found")]
    NotFound(GameId),

    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),
}

impl GameError {
    /// Stable category code for the transport layer
    pub fn code(&self) -> &'static str {
        match self {
            GameError::NotFound(_) => "not_found",
            GameError::IllegalMove(_) => "illegal_move",
        }
    }
}

/// Text that is not a canonical game identifier
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid game id: {0:?}")]
pub struct ParseGameIdError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let not_found = GameError::NotFound(GameId::from_random(7));
        let illegal = GameError::from(IllegalMove::CellTaken);
        assert_eq!(not_found.code(), "not_found");
        assert_eq!(illegal.code(), "illegal_move");
    }

    #[test]
    fn test_illegal_move_message_passes_through() {
        let err = GameError::from(IllegalMove::WrongTurn);
        assert_eq!(err.to_string(), "Not your turn");
        assert_eq!(GameError::NotFound(GameId::from_random(1)).to_string(), "Game not found");
    }
}
