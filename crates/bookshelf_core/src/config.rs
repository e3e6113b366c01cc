//! Runtime configuration resolved from the process environment.
//!
//! # Responsibility
//! - Decide where the persistent key-value store lives.
//! - Provide log-level defaults shared by every front end.
//!
//! # Invariants
//! - Blank environment values are treated as unset.

use std::path::PathBuf;

/// Overrides the SQLite file backing the bookshelf.
pub const DB_PATH_ENV: &str = "BOOKSHELF_DB_PATH";
/// Overrides the log level (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "BOOKSHELF_LOG_LEVEL";
/// Absolute directory receiving rolling log files.
pub const LOG_DIR_ENV: &str = "BOOKSHELF_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "bookshelf.sqlite3";

/// Where book data is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// SQLite file at the given path.
    Sqlite(PathBuf),
    /// No persistent store; data lives for the session only.
    Memory,
}

/// Returns `$BOOKSHELF_DB_PATH`, falling back to a file in the temp directory.
pub fn resolve_db_path() -> PathBuf {
    env_value(DB_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME))
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn env_value(name: &str) -> Option<String> {
    let raw = std::env::var(name).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
