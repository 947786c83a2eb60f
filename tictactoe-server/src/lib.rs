//! Tic-Tac-Toe Server - HTTP API over the game engine
//!
//! This crate provides the web backend:
//! - JSON routes for creating games, reading boards, and submitting moves
//! - Error to status-code mapping
//! - Permissive CORS for browser clients

mod error;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub use error::ApiError;
pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
        }
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Game API
        .route("/create_game", post(routes::game::create_game))
        .route("/board/:game_id", get(routes::game::get_board))
        .route("/game/:game_id", get(routes::game::get_game))
        .route("/move/:game_id", post(routes::game::make_move))
        // Shared state
        .with_state(state)
        .layer(cors)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.addr();
    let state = Arc::new(ServerState::new());
    let router = create_router(state);

    tracing::info!("Tic-tac-toe server starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
