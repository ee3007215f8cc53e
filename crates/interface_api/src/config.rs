//! API configuration

use serde::Deserialize;

/// Which storage adapter the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Single JSON file on local disk
    File,
    /// Embedded SQLite database
    Sqlite,
    /// Another instance of this API, reached over HTTP
    Remote,
}

/// API configuration
///
/// Every field has a default, so a bare environment starts a working
/// server with the embedded SQLite backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Storage adapter to serve from
    pub store_backend: StoreBackend,
    /// Database URL for the `sqlite` backend
    pub database_url: String,
    /// Data file path for the `file` backend
    pub data_file: String,
    /// Base URL for the `remote` backend
    pub remote_base_url: String,
    /// Request timeout for the `remote` backend, in seconds
    pub remote_timeout_secs: u64,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            store_backend: StoreBackend::Sqlite,
            database_url: "sqlite://policytrack.db".to_string(),
            data_file: "policytrack.json".to_string(),
            remote_base_url: "http://127.0.0.1:8080".to_string(),
            remote_timeout_secs: 5,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
