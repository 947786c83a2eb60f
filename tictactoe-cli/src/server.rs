//! Server command - start the HTTP game server
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to tictactoe-server crate)
//! - Level 4: configuration validation

use std::net::IpAddr;

use anyhow::Result;
use clap::Args;

use tictactoe_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port number to listen on
    #[arg(long, default_value = "8000")]
    pub port: u16,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
///
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!("Starting tic-tac-toe server on {}", config.addr());

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs) -> Result<ServerConfig> {
    validate_port(args.port)?;

    Ok(ServerConfig {
        host: args.host,
        port: args.port,
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Clients need a known port, so an OS-assigned one is refused
fn validate_port(port: u16) -> Result<()> {
    if port == 0 {
        anyhow::bail!("Port must be non-zero");
    }
    if port < 1024 {
        tracing::warn!("Port {} is privileged and may need elevated permissions", port);
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
