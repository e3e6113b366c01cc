//! Persistent storage adapter for the book collection.
//!
//! # Responsibility
//! - Abstract the host key-value store behind [`KeyValueStore`].
//! - Encode/decode the whole collection as JSON text under [`STORAGE_KEY`].
//! - Degrade to session-only operation when no store is available.
//!
//! # Invariants
//! - Writes always replace the full collection; there are no partial writes.
//! - `BookStorage::load` and `BookStorage::save` never return errors; failures
//!   are logged and treated as "empty" / "not written".
//! - Log events never include book titles or authors.

use crate::config::StorageConfig;
use crate::model::book::Book;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

/// Fixed key holding the serialized collection.
pub const STORAGE_KEY: &str = "BOOKSHELF_APP";

pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by key-value stores, their SQLite bootstrap and the
/// collection codec.
#[derive(Debug)]
pub enum StorageError {
    /// The SQLite backend rejected an open, migration or statement.
    Sqlite(rusqlite::Error),
    /// The database file was migrated by a newer build.
    SchemaTooNew { found: u32, supported: u32 },
    Encode(serde_json::Error),
    Decode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite store failed: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "bookshelf database is at schema {found}, this build reads up to {supported}"
            ),
            Self::Encode(err) => write!(f, "failed to encode book collection: {err}"),
            Self::Decode(err) => write!(f, "failed to decode book collection: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
            Self::Encode(err) | Self::Decode(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Text key-value store contract.
///
/// Implementations are single-threaded; `set` overwrites any prior value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Result of reading the collection, kept apart from [`BookStorage::load`]
/// so callers and tests can tell the empty cases apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No store is configured.
    Unavailable,
    /// The store has no value under [`STORAGE_KEY`].
    Missing,
    /// The stored text decoded successfully.
    Loaded(Vec<Book>),
    /// The stored text could not be decoded.
    Corrupt,
    /// The store itself failed to read.
    ReadFailed,
}

impl LoadOutcome {
    /// Collapses the outcome into the collection to start from.
    pub fn into_books(self) -> Vec<Book> {
        match self {
            Self::Loaded(books) => books,
            _ => Vec::new(),
        }
    }
}

/// Storage adapter persisting the whole book collection.
pub struct BookStorage {
    store: Option<Box<dyn KeyValueStore>>,
}

impl BookStorage {
    /// Wraps an available key-value store.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Some(Box::new(store)),
        }
    }

    /// Storage with no backing store: loads are empty, saves are dropped.
    pub fn unavailable() -> Self {
        Self { store: None }
    }

    /// Opens storage for `config`.
    ///
    /// A SQLite file that cannot be opened degrades to [`BookStorage::unavailable`].
    pub fn open(config: &StorageConfig) -> Self {
        match config {
            StorageConfig::Memory => Self::new(MemoryKeyValueStore::new()),
            StorageConfig::Sqlite(path) => match SqliteKeyValueStore::open(path) {
                Ok(store) => Self::new(store),
                Err(err) => {
                    warn!(
                        "event=storage_open module=storage status=degraded reason=open_failed error={}",
                        err
                    );
                    Self::unavailable()
                }
            },
        }
    }

    /// Returns whether a persistent store backs this adapter.
    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    /// Reads the collection, or an empty one when absent or unreadable.
    pub fn load(&self) -> Vec<Book> {
        self.load_detailed().into_books()
    }

    /// Reads the collection and reports which path was taken.
    pub fn load_detailed(&self) -> LoadOutcome {
        let Some(store) = self.store.as_deref() else {
            return LoadOutcome::Unavailable;
        };

        let text = match store.get(STORAGE_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => {
                info!("event=storage_load module=storage status=missing");
                return LoadOutcome::Missing;
            }
            Err(err) => {
                error!(
                    "event=storage_load module=storage status=error error_code=read_failed error={}",
                    err
                );
                return LoadOutcome::ReadFailed;
            }
        };

        match decode_books(&text) {
            Ok(books) => {
                info!(
                    "event=storage_load module=storage status=ok count={}",
                    books.len()
                );
                LoadOutcome::Loaded(books)
            }
            Err(err) => {
                // Prior data is dropped here and overwritten by the next save.
                warn!(
                    "event=storage_load module=storage status=corrupt bytes={} error={}",
                    text.len(),
                    err
                );
                LoadOutcome::Corrupt
            }
        }
    }

    /// Overwrites the stored collection with `books`.
    pub fn save(&self, books: &[Book]) {
        let Some(store) = self.store.as_deref() else {
            return;
        };

        let result = encode_books(books).and_then(|text| store.set(STORAGE_KEY, &text));
        match result {
            Ok(()) => info!(
                "event=storage_save module=storage status=ok count={}",
                books.len()
            ),
            Err(err) => error!(
                "event=storage_save module=storage status=error count={} error={}",
                books.len(),
                err
            ),
        }
    }
}

/// Encodes a collection into its persisted JSON text.
pub fn encode_books(books: &[Book]) -> StorageResult<String> {
    serde_json::to_string(books).map_err(StorageError::Encode)
}

/// Decodes persisted JSON text into a collection.
pub fn decode_books(text: &str) -> StorageResult<Vec<Book>> {
    serde_json::from_str(text).map_err(StorageError::Decode)
}

#[cfg(test)]
mod tests {
    use super::{decode_books, encode_books, StorageError};
    use crate::model::book::Book;

    #[test]
    fn encoded_layout_uses_persisted_field_names() {
        let text = encode_books(&[Book::new(7, "Bumi", "Tere Liye", 2014, true)]).unwrap();
        assert_eq!(
            text,
            r#"[{"id":7,"title":"Bumi","author":"Tere Liye","year":2014,"isComplete":true}]"#
        );
    }

    #[test]
    fn decode_accepts_null_year() {
        let books =
            decode_books(r#"[{"id":1,"title":"t","author":"a","year":null,"isComplete":false}]"#)
                .unwrap();
        assert_eq!(books[0].year, 0);
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let err = decode_books(r#"[{"id":1,"title":"t"}]"#).unwrap_err();
        assert!(matches!(err, StorageError::Decode(_)));
    }
}
