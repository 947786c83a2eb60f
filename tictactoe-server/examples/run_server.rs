//! Example to run the tic-tac-toe server standalone
//!
//! Run with: cargo run -p tictactoe-server --example run_server

use tictactoe_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();

    println!("Starting tic-tac-toe server on {}", config.addr());
    println!("Try: curl -X POST 'http://localhost:{}/create_game?against_algorithm=true'", config.port);

    run_server(config).await
}
