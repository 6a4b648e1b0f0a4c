//! Database configuration - environment loading
//!
//! Configuration is loaded from environment variables:
//! - `DATABASE_HOST`: MySQL host (default: 127.0.0.1)
//! - `DATABASE_PORT`: MySQL port (default: 3306)
//! - `DATABASE_USER`: user name (default: root)
//! - `DATABASE_PASS`: password (default: empty)
//! - `DATABASE`: schema name (default: students)

use std::fmt;

use sqlx::mysql::MySqlConnectOptions;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3306;
const DEFAULT_USER: &str = "root";
const DEFAULT_DATABASE: &str = "students";

/// MySQL connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("DATABASE_PORT").map(|raw| raw.parse::<u16>()) {
            Some(Ok(port)) => port,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "DATABASE_PORT is not a valid port, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }
            None => DEFAULT_PORT,
        };

        Self {
            host: lookup("DATABASE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            user: lookup("DATABASE_USER").unwrap_or_else(|| DEFAULT_USER.to_string()),
            password: lookup("DATABASE_PASS").unwrap_or_default(),
            database: lookup("DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        }
    }

    /// Driver connect options built from the individual fields.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = DbConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3306);
        assert_eq!(config.user, "root");
        assert_eq!(config.password, "");
        assert_eq!(config.database, "students");
    }

    #[test]
    fn reads_every_variable() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("DATABASE_HOST", "db.internal"),
            ("DATABASE_PORT", "3307"),
            ("DATABASE_USER", "app"),
            ("DATABASE_PASS", "hunter2"),
            ("DATABASE", "school"),
        ]);
        let config = DbConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 3307);
        assert_eq!(config.user, "app");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.database, "school");
    }

    #[test]
    fn bad_port_falls_back() {
        let config = DbConfig::from_lookup(|key| {
            (key == "DATABASE_PORT").then(|| "not-a-port".to_string())
        });
        assert_eq!(config.port, 3306);
    }

    #[test]
    fn debug_redacts_password() {
        let config = DbConfig {
            password: "hunter2".into(),
            ..DbConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }
}
