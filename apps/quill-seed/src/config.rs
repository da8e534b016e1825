//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use quill_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub seed_file: PathBuf,
    /// `None` runs against in-memory storage.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let database = var("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: var("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        });

        Self {
            seed_file: var("SEED_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("seed.json")),
            database,
        }
    }
}
