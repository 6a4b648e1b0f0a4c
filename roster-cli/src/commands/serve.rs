//! HTTP server command
//!
//! Runs the student record service until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use roster_server::{create_pool, run_server, DbConfig, ServerConfig, StudentRepo, StudentService};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ROSTER_BIND", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Directory of static files served from /
    #[arg(long, env = "ROSTER_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from_env();
    tracing::info!(
        host = %db_config.host,
        database = %db_config.database,
        "Starting roster server on {}",
        args.bind
    );

    // Lazy pool: connectivity is reported by the startup check, not here
    let pool = create_pool(&db_config);
    let service = StudentService::new(Arc::new(StudentRepo::new(pool)));

    let config = ServerConfig {
        bind_addr: args.bind,
        public_dir: args.public_dir,
    };

    // Run server (blocks until shutdown)
    run_server(service, config).await.context("Server error")?;

    Ok(())
}
