//! roster CLI - student record service
//!
//! Entry point for the `roster` binary:
//! - `serve`: run the HTTP API and static front end
//! - `ping`: check that the configured MySQL database answers
//!
//! Database settings come from the environment (`DATABASE_HOST`,
//! `DATABASE_USER`, `DATABASE_PASS`, `DATABASE`), optionally via `.env`.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    author,
    version,
    about = "Student record service backed by MySQL"
)]
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
    /// Check database connectivity
    Ping(commands::ping::PingArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; plain environment variables still apply
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match dotenv {
        Ok(path) => tracing::debug!("Loaded .env from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!(error = %e, "Failed to parse .env"),
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Ping(args) => commands::run_ping(args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["roster", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind.port(), 5000);
        assert_eq!(args.public_dir, std::path::PathBuf::from("public"));
    }

    #[test]
    fn global_debug_flag() {
        let cli = Cli::try_parse_from(["roster", "ping", "--debug"]).unwrap();
        assert!(cli.debug);
    }
}
