//! Runtime configuration for hosts embedding the core.
//!
//! # Responsibility
//! - Resolve data directory, database path, log directory and level.
//! - Resolve the slot name holding the note snapshot.
//!
//! # Invariants
//! - Resolution never fails; unset or blank variables fall back to defaults.
//! - Invalid log levels fall back to `default_log_level()`.

use crate::logging::{default_log_level, normalize_level};
use crate::repo::note_snapshot::NOTES_STORAGE_KEY;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

pub const DATA_DIR_ENV: &str = "QUICKNOTES_DATA_DIR";
pub const LOG_LEVEL_ENV: &str = "QUICKNOTES_LOG_LEVEL";
pub const STORAGE_KEY_ENV: &str = "QUICKNOTES_STORAGE_KEY";

const DEFAULT_DIR_NAME: &str = ".quicknotes";
const DB_FILE_NAME: &str = "quicknotes.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_file_name: String,
    pub log_level: &'static str,
    pub storage_key: String,
}

impl AppConfig {
    /// Builds defaults rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            db_file_name: DB_FILE_NAME.to_string(),
            log_level: default_log_level(),
            storage_key: NOTES_STORAGE_KEY.to_string(),
        }
    }

    /// Reads `QUICKNOTES_*` variables, falling back to `$HOME/.quicknotes`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let data_dir = non_blank(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let home = non_blank("HOME").unwrap_or_else(|| ".".to_string());
                PathBuf::from(home).join(DEFAULT_DIR_NAME)
            });

        let mut config = Self::with_data_dir(data_dir);
        if let Some(level) = non_blank(LOG_LEVEL_ENV).and_then(|raw| normalize_level(&raw).ok()) {
            config.log_level = level;
        }
        if let Some(key) = non_blank(STORAGE_KEY_ENV) {
            config.storage_key = key;
        }
        config
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }

    /// Creates the data and log directories.
    pub fn ensure_dirs(&self) -> io::Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::create_dir_all(self.log_dir())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
