//! Database connection pool management
//!
//! Uses sqlx MySqlPool with an explicit connection limit. Callers wait for
//! a free connection when every slot is busy.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use crate::config::DbConfig;

/// Maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a MySQL connection pool.
///
/// Connections are opened lazily, so this never fails and a database that
/// is down at startup does not keep the server from listening.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env());
/// ```
pub fn create_pool(config: &DbConfig) -> MySqlPool {
    create_pool_with_options(config, DEFAULT_MAX_CONNECTIONS)
}

/// Create a MySQL connection pool with custom options.
///
/// # Arguments
///
/// * `config` - connection settings
/// * `max_connections` - Maximum number of connections in the pool
pub fn create_pool_with_options(config: &DbConfig, max_connections: u32) -> MySqlPool {
    tracing::debug!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        max_connections,
        "Creating MySQL pool"
    );

    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(config.connect_options())
}
