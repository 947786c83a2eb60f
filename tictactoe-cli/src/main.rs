//! Tic-Tac-Toe CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the HTTP game server
//! - play: Play a game in the terminal

mod play;
mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe game server with a minimax opponent")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP game server
    Serve(server::ServerArgs),
    /// Play a game in the terminal
    Play(play::PlayArgs),
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => server::run(args),
        Commands::Play(args) => play::run(args),
    }
}

/// Log to stderr, filtered by RUST_LOG (default: info)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
