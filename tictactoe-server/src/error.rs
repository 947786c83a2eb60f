//! Mapping of engine errors onto HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tictactoe_core::GameError;

/// Error returned by route handlers
#[derive(Debug)]
pub enum ApiError {
    Game(GameError),
    /// Path segment that is not a game id at all
    MalformedId(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
    code: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Game(GameError::NotFound(_)) | ApiError::MalformedId(_) => StatusCode::NOT_FOUND,
            ApiError::Game(GameError::IllegalMove(_)) => StatusCode::BAD_REQUEST,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::Game(err) => ErrorBody {
                detail: err.to_string(),
                code: err.code(),
            },
            ApiError::MalformedId(_) => ErrorBody {
                detail: "Game not found".to_string(),
                code: "not_found",
            },
        }
    }
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        ApiError::Game(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::MalformedId(text) = &self {
            tracing::debug!("malformed game id {:?}", text);
        }
        (self.status(), Json(self.body())).into_response()
    }
}
