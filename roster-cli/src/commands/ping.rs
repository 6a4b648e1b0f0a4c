//! Database connectivity check

use anyhow::{Context, Result};
use clap::Parser;

use roster_server::{create_pool, DbConfig, StudentRepo, StudentStore};

/// Arguments for the ping command
#[derive(Parser, Debug)]
pub struct PingArgs {}

/// Run `SELECT 1` against the configured database
pub async fn run_ping(_args: PingArgs) -> Result<()> {
    let db_config = DbConfig::from_env();
    tracing::debug!(?db_config, "Pinging database");

    let repo = StudentRepo::new(create_pool(&db_config));
    repo.ping().await.with_context(|| {
        format!(
            "Failed to connect to database {} at {}:{}",
            db_config.database, db_config.host, db_config.port
        )
    })?;

    println!("Database connected successfully");
    Ok(())
}
