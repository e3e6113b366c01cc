//! SQLite-backed key-value store.
//!
//! # Invariants
//! - One row per key in `kv_entries`; `set` is an upsert.
//! - The connection has migrations applied before first use.

use super::{KeyValueStore, StorageResult};
use crate::db::{open_db, open_db_in_memory};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Wraps a connection previously returned by `db::open_db*`.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens (and migrates) the SQLite file at `path`.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
