//! Book repository: ordered collection plus persistence.
//!
//! # Responsibility
//! - Provide create/find/toggle/remove/search over the collection.
//! - Write the full collection through [`BookStorage`] after each change.
//!
//! # Invariants
//! - Ids are unique across the collection, including after the time-based
//!   generator is exhausted.
//! - Toggling an unknown id is a silent no-op and does not write.
//! - Removing rewrites the collection even when nothing matched.
//! - `search` never mutates the collection.

use super::id::IdGenerator;
use crate::model::book::{Book, BookId};
use crate::search::title::TitleQuery;
use crate::storage::BookStorage;
use log::{debug, warn};

/// Owned book collection synchronized with storage.
pub struct BookRepository {
    books: Vec<Book>,
    storage: BookStorage,
    ids: IdGenerator,
}

impl BookRepository {
    /// Loads the collection from `storage` using the wall clock for ids.
    pub fn open(storage: BookStorage) -> Self {
        Self::with_id_generator(storage, IdGenerator::default())
    }

    /// Loads the collection from `storage` with a custom id source.
    pub fn with_id_generator(storage: BookStorage, mut ids: IdGenerator) -> Self {
        let books = storage.load();
        if let Some(max_id) = books.iter().map(|book| book.id).max() {
            ids.observe(max_id);
        }
        Self {
            books,
            storage,
            ids,
        }
    }

    /// Full collection in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn storage(&self) -> &BookStorage {
        &self.storage
    }

    /// Appends a new book with a fresh id and persists the collection.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        is_complete: bool,
    ) -> Book {
        let id = match self.ids.next_id() {
            Some(id) => id,
            None => {
                let id = self.smallest_unused_id();
                warn!("event=book_create module=repo status=id_fallback book_id={id}");
                id
            }
        };
        let book = Book::new(id, title, author, year, is_complete);
        self.books.push(book.clone());
        debug!(
            "event=book_create module=repo status=ok book_id={} count={}",
            book.id,
            self.books.len()
        );
        self.persist();
        book
    }

    /// First book with `id`, if any.
    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Flips completion of the book with `id` and persists.
    ///
    /// Returns the new flag, or `None` when no book matches.
    pub fn toggle_complete(&mut self, id: BookId) -> Option<bool> {
        let Some(book) = self.books.iter_mut().find(|book| book.id == id) else {
            debug!("event=book_toggle module=repo status=not_found book_id={id}");
            return None;
        };
        let is_complete = book.toggle_complete();
        debug!("event=book_toggle module=repo status=ok book_id={id} is_complete={is_complete}");
        self.persist();
        Some(is_complete)
    }

    /// Removes every book with `id`, persists, and returns how many were removed.
    pub fn remove_by_id(&mut self, id: BookId) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.id != id);
        let removed = before - self.books.len();
        debug!("event=book_remove module=repo status=ok book_id={id} removed={removed}");
        self.persist();
        removed
    }

    /// Books whose title contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<Book> {
        TitleQuery::new(query).filter(&self.books)
    }

    /// Smallest non-negative id no stored book uses.
    fn smallest_unused_id(&self) -> BookId {
        let mut used: Vec<BookId> = self
            .books
            .iter()
            .map(|book| book.id)
            .filter(|id| *id >= 0)
            .collect();
        used.sort_unstable();
        used.dedup();
        let mut candidate = 0;
        for id in used {
            if id != candidate {
                break;
            }
            candidate += 1;
        }
        candidate
    }

    fn persist(&self) {
        self.storage.save(&self.books);
    }
}
