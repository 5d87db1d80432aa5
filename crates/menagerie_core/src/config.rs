//! Runtime configuration for hosts embedding the registry.
//!
//! Values come from built-in defaults, overridden by environment variables.
//! Blank variables count as unset.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use std::path::PathBuf;

pub const DEFAULT_STORE_FILE_NAME: &str = "animals.json";
pub const STORE_PATH_ENV: &str = "MENAGERIE_STORE";
pub const LOG_LEVEL_ENV: &str = "MENAGERIE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "MENAGERIE_LOG_DIR";

/// Resolved storage and logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Backing JSON document for the animal collection.
    pub store_path: PathBuf,
    pub log_level: &'static str,
    /// File logging is disabled when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl StoreConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    /// - `UnsupportedLevel` when the log level variable is not a known level.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoggingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = read(STORE_PATH_ENV) {
            config.store_path = PathBuf::from(path);
        }
        if let Some(level) = read(LOG_LEVEL_ENV) {
            config.log_level = normalize_level(&level)?;
        }
        config.log_dir = read(LOG_DIR_ENV).map(PathBuf::from);
        Ok(config)
    }
}
