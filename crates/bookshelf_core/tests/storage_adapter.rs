use bookshelf_core::storage::{decode_books, encode_books};
use bookshelf_core::{
    Book, BookStorage, KeyValueStore, LoadOutcome, MemoryKeyValueStore, SqliteKeyValueStore,
    StorageConfig, StorageError, StorageResult, STORAGE_KEY,
};
use std::cell::Cell;
use std::rc::Rc;

/// Store whose reads always fail; counts writes.
struct BrokenReadStore {
    writes: Rc<Cell<usize>>,
}

impl KeyValueStore for BrokenReadStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Sqlite(rusqlite::Error::InvalidQuery))
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

fn sample_books() -> Vec<Book> {
    vec![
        Book::new(1_700_000_000_001, "Laskar Pelangi", "Andrea Hirata", 2005, false),
        Book::new(1_700_000_000_002, "Bumi Manusia", "Pramoedya Ananta Toer", 1980, true),
        Book::new(1_700_000_000_003, "", "", 0, false),
    ]
}

#[test]
fn load_returns_empty_when_key_is_absent() {
    let storage = BookStorage::new(MemoryKeyValueStore::new());

    assert_eq!(storage.load_detailed(), LoadOutcome::Missing);
    assert!(storage.load().is_empty());
}

#[test]
fn load_after_save_reproduces_collection() {
    let storage = BookStorage::new(MemoryKeyValueStore::new());
    let books = sample_books();

    storage.save(&books);

    assert_eq!(storage.load(), books);
}

#[test]
fn save_of_loaded_collection_leaves_stored_text_unchanged() {
    let store = MemoryKeyValueStore::new();
    let storage = BookStorage::new(store.clone());
    storage.save(&sample_books());
    let before = store.get(STORAGE_KEY).unwrap().unwrap();

    storage.save(&storage.load());

    assert_eq!(store.get(STORAGE_KEY).unwrap().unwrap(), before);
}

#[test]
fn save_overwrites_previous_value() {
    let store = MemoryKeyValueStore::new();
    let storage = BookStorage::new(store.clone());

    storage.save(&sample_books());
    storage.save(&[]);

    assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    assert_eq!(storage.load_detailed(), LoadOutcome::Loaded(Vec::new()));
}

#[test]
fn malformed_text_loads_as_empty_collection() {
    let store = MemoryKeyValueStore::new();
    store.set(STORAGE_KEY, "{not json").unwrap();
    let storage = BookStorage::new(store);

    assert_eq!(storage.load_detailed(), LoadOutcome::Corrupt);
    assert!(storage.load().is_empty());
}

#[test]
fn wrongly_shaped_json_loads_as_empty_collection() {
    let store = MemoryKeyValueStore::new();
    store.set(STORAGE_KEY, r#"{"id":1}"#).unwrap();

    assert!(BookStorage::new(store).load().is_empty());
}

#[test]
fn unavailable_storage_is_a_no_op() {
    let storage = BookStorage::unavailable();

    storage.save(&sample_books());

    assert!(!storage.is_available());
    assert_eq!(storage.load_detailed(), LoadOutcome::Unavailable);
    assert!(storage.load().is_empty());
}

#[test]
fn reads_payload_written_by_browser_version() {
    let text = r#"[{"id":1718000000000,"title":"Bumi","author":"Tere Liye","year":2014,"isComplete":false},{"id":1718000000500,"title":"X","author":"Y","year":null,"isComplete":true}]"#;

    let books = decode_books(text).unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0], Book::new(1718000000000, "Bumi", "Tere Liye", 2014, false));
    assert_eq!(books[1].year, 0);
    assert!(books[1].is_complete);
}

#[test]
fn sqlite_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shelf.sqlite3");
    let books = sample_books();

    BookStorage::new(SqliteKeyValueStore::open(&path).unwrap()).save(&books);

    let reopened = BookStorage::open(&StorageConfig::Sqlite(path));
    assert!(reopened.is_available());
    assert_eq!(reopened.load(), books);
}

#[test]
fn sqlite_store_upserts_single_key() {
    let store = SqliteKeyValueStore::open_in_memory().unwrap();

    store.set(STORAGE_KEY, "[]").unwrap();
    store
        .set(STORAGE_KEY, &encode_books(&sample_books()).unwrap())
        .unwrap();

    let stored = store.get(STORAGE_KEY).unwrap().unwrap();
    assert_eq!(decode_books(&stored).unwrap(), sample_books());
    assert_eq!(store.get("OTHER_KEY").unwrap(), None);
}

#[test]
fn unopenable_sqlite_path_degrades_to_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-directory");
    std::fs::write(&blocker, b"plain file").unwrap();
    let storage = BookStorage::open(&StorageConfig::Sqlite(blocker.join("shelf.sqlite3")));

    assert!(!storage.is_available());
    storage.save(&sample_books());
    assert!(storage.load().is_empty());
}

#[test]
fn read_failure_loads_as_empty_collection() {
    let writes = Rc::new(Cell::new(0));
    let storage = BookStorage::new(BrokenReadStore {
        writes: writes.clone(),
    });

    assert_eq!(storage.load_detailed(), LoadOutcome::ReadFailed);
    assert!(storage.load().is_empty());
    assert!(storage.is_available());
    assert_eq!(writes.get(), 0);
}

#[test]
fn out_of_range_and_fractional_years_keep_the_collection() {
    let text = r#"[
        {"id":1,"title":"Huge","author":"a","year":10000000000,"isComplete":false},
        {"id":2,"title":"Float","author":"a","year":1999.7,"isComplete":true},
        {"id":3,"title":"Beyond","author":"a","year":1e30,"isComplete":false},
        {"id":4,"title":"Text","author":"a","year":"2005","isComplete":false}
    ]"#;
    let store = MemoryKeyValueStore::new();
    store.set(STORAGE_KEY, text).unwrap();

    let books = BookStorage::new(store).load();

    let years: Vec<i64> = books.iter().map(|book| book.year).collect();
    assert_eq!(years, vec![10_000_000_000, 1999, i64::MAX, 0]);
}
