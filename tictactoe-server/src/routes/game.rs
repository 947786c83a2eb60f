//! Game API routes
//!
//! Create games, read boards, submit moves.

use crate::error::ApiError;
use crate::state::ServerState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tictactoe_core::{Board, GameId, GameResult, MoveOutcome, Player};

// ============================================================================
// REQUEST / RESPONSE TYPES
// ============================================================================

#[derive(Deserialize)]
pub struct CreateGameParams {
    pub against_algorithm: bool,
}

#[derive(Serialize)]
pub struct CreateGameResponse {
    pub game_id: GameId,
}

#[derive(Serialize)]
pub struct BoardResponse {
    pub board: Board,
}

#[derive(Serialize)]
pub struct GameResponse {
    pub game_id: GameId,
    pub board: Board,
    pub current_player: Player,
    pub against_algorithm: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Player>,
    pub tie: bool,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub player: Player,
    pub row: usize,
    pub col: usize,
}

/// Body of a successful move: terminal win, terminal tie, or continuation
#[derive(Serialize)]
#[serde(untagged)]
pub enum MoveResponse {
    Won {
        winner: Player,
        message: String,
        board: Board,
    },
    Tie {
        tie: bool,
        message: &'static str,
        board: Board,
    },
    Continue {
        board: Board,
        next_player: Player,
    },
}

impl From<MoveOutcome> for MoveResponse {
    fn from(outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Won { winner, board } => MoveResponse::Won {
                winner,
                message: format!("Player {} wins!", winner),
                board,
            },
            MoveOutcome::Tie { board } => MoveResponse::Tie {
                tie: true,
                message: "It's a tie!",
                board,
            },
            MoveOutcome::Continue { board, next_player } => {
                MoveResponse::Continue { board, next_player }
            }
        }
    }
}

fn parse_id(text: &str) -> Result<GameId, ApiError> {
    text.parse()
        .map_err(|_| ApiError::MalformedId(text.to_string()))
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Create a new game
pub async fn create_game(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<CreateGameParams>,
) -> Json<CreateGameResponse> {
    let game_id = state.engine.create(params.against_algorithm);
    Json(CreateGameResponse { game_id })
}

/// Get the current board of a game
pub async fn get_board(
    State(state): State<Arc<ServerState>>,
    Path(game_id): Path<String>,
) -> Result<Json<BoardResponse>, ApiError> {
    let id = parse_id(&game_id)?;
    let board = state.engine.get_board(id)?;
    Ok(Json(BoardResponse { board }))
}

/// Get the full state of a game
pub async fn get_game(
    State(state): State<Arc<ServerState>>,
    Path(game_id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    let id = parse_id(&game_id)?;
    let game = state.engine.get_game(id)?;

    let winner = match game.result() {
        GameResult::Won(player) => Some(player),
        _ => None,
    };

    Ok(Json(GameResponse {
        game_id: id,
        board: *game.board(),
        current_player: game.current_player(),
        against_algorithm: game.against_algorithm(),
        winner,
        tie: game.result() == GameResult::Tie,
    }))
}

/// Submit a move; games against the algorithm get the reply in the same response
pub async fn make_move(
    State(state): State<Arc<ServerState>>,
    Path(game_id): Path<String>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let id = parse_id(&game_id)?;

    match state.engine.apply_move(id, req.player, req.row, req.col) {
        Ok(outcome) => Ok(Json(outcome.into())),
        Err(err) => {
            tracing::warn!(game_id = %game_id, player = %req.player, row = req.row, col = req.col, "rejected move: {}", err);
            Err(err.into())
        }
    }
}
