//! Runtime configuration for opening the core.
//!
//! Storage location is the only setting read from the environment.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Environment variable overriding the database file location.
pub const DB_PATH_ENV: &str = "BABYLON_DB_PATH";

pub const DEFAULT_DB_FILE_NAME: &str = "babylon_wealth.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging is started only when set. Must be absolute.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Defaults, with `db_path` taken from `BABYLON_DB_PATH` when set.
    pub fn from_env() -> Self {
        Self::from_db_path_var(std::env::var_os(DB_PATH_ENV).map(PathBuf::from))
    }

    fn from_db_path_var(value: Option<PathBuf>) -> Self {
        let mut config = Self::default();
        if let Some(path) = value.filter(|path| !path.as_os_str().is_empty()) {
            config.db_path = path;
        }
        config
    }

    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    pub fn with_logging(mut self, level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        self.log_level = level.into();
        self.log_dir = Some(log_dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_database_without_file_logging() {
        let config = CoreConfig::default();
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE_NAME));
        assert_eq!(config.log_level, default_log_level());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn db_path_variable_overrides_default_unless_empty() {
        let config = CoreConfig::from_db_path_var(Some(PathBuf::from("/data/ledger.db")));
        assert_eq!(config.db_path, PathBuf::from("/data/ledger.db"));

        let config = CoreConfig::from_db_path_var(Some(PathBuf::new()));
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE_NAME));
    }

    #[test]
    fn builders_set_fields() {
        let config = CoreConfig::default()
            .with_db_path("/tmp/x.db")
            .with_logging("warn", "/tmp/logs");
        assert_eq!(config.db_path, PathBuf::from("/tmp/x.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
    }
}
