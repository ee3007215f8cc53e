//! Database connection pool management
//!
//! This module provides connection pool configuration and creation for SQLite
//! using SQLx. Pools are created lazily: no connection is opened until the
//! first query runs.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use core_kernel::StoreError;

/// Type alias for the SQLite connection pool
pub type DatabasePool = SqlitePool;

/// Configuration options for the database connection pool
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use infra_db::DatabaseConfig;
///
/// let config = DatabaseConfig::new("sqlite://policytrack.db")
///     .max_connections(8)
///     .acquire_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection string
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Duration to wait for a free connection
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with the given connection URL
    ///
    /// # Arguments
    ///
    /// * `url` - SQLite connection string (e.g., "sqlite://policytrack.db")
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Sets the maximum number of connections in the pool
    ///
    /// In-memory databases must use exactly one connection, because every
    /// new SQLite connection to `:memory:` opens its own empty database.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the duration to wait for a free connection
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("sqlite://policytrack.db")
    }
}

/// Creates a lazy database connection pool with the given configuration
///
/// The database file is created on first use if it does not exist. Foreign
/// key enforcement is switched on for every connection.
///
/// # Errors
///
/// Returns a validation error if the connection URL cannot be parsed.
pub fn create_pool(config: DatabaseConfig) -> Result<DatabasePool, StoreError> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| {
            StoreError::validation(format!("invalid database url '{}': {e}", config.url))
        })?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options);

    info!(
        url = %config.url,
        max_connections = config.max_connections,
        "database pool created"
    );
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DatabaseConfig::new("sqlite::memory:")
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(5));

        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_unparseable_url_is_a_validation_error() {
        let result = create_pool(DatabaseConfig::new("postgres://wrong/engine"));
        assert!(result.is_err());
        assert!(result.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_lazy_pool_creation_does_not_touch_the_disk() {
        let config = DatabaseConfig::new("sqlite:///nonexistent-dir/never-created.db");
        assert!(create_pool(config).is_ok());
    }
}
