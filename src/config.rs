//! Database connection configuration.
//!
//! The fixture targets a throwaway test database. By default that is an
//! in-memory `SQLite` database; the URL can be overridden through the
//! `AULA_DB_URL` environment variable for file-backed runs.

use std::path::Path;

/// In-memory database URL used when nothing else is configured.
pub const DEFAULT_DB_URL: &str = "sqlite::memory:";

/// Environment variable that overrides the database URL.
pub const DB_URL_ENV: &str = "AULA_DB_URL";

/// Connection parameters for the test database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL (e.g., "sqlite::memory:" or "sqlite:/tmp/aula.db").
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DB_URL.to_string(),
            max_connections: 1,
        }
    }
}

impl DatabaseConfig {
    /// Configuration for a specific database URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let max_connections = if url_is_in_memory(&url) { 1 } else { 5 };
        Self {
            url,
            max_connections,
        }
    }

    /// Configuration from the environment, falling back to the in-memory default.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(DB_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Configuration for a file-backed database at the given path.
    #[must_use]
    pub fn for_file(path: &Path) -> Self {
        Self::new(format!("sqlite:{}", path.display()))
    }

    /// Whether this configuration targets an in-memory database.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        url_is_in_memory(&self.url)
    }
}

// Every pooled connection to ":memory:" opens its own empty database, so
// in-memory configurations must be capped at a single connection.
fn url_is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
