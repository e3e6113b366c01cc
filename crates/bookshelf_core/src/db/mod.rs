//! SQLite bootstrap backing the persistent key-value store.
//!
//! # Responsibility
//! - Open and configure the connection behind `SqliteKeyValueStore`.
//! - Bring the `kv_entries` schema up to date before first use.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Nothing reads or writes `kv_entries` before migrations succeed.
//! - Failures surface as [`crate::storage::StorageError`]; this module has no
//!   error type of its own.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
