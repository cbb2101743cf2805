//! dashboard CLI - runs the analytics dashboard API
//!
//! Configuration comes from flags, the environment, and an optional `.env`
//! file in the working directory (environment values win over `.env`).

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(name = "dashboard", version, about = "Analytics dashboard API server")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before parsing so clap's `env` fallbacks see .env values
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }

    Ok(())
}
