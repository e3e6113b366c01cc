//! Core domain logic for the bookshelf.
//! This crate is the single source of truth for collection invariants.

pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod storage;
pub mod view;

pub use config::{default_log_level, StorageConfig};
pub use controller::shelf_controller::{EventOutcome, ShelfController, ShelfEvent, ViewMode};
pub use logging::{init_logging, logging_status};
pub use model::book::{parse_year, Book, BookForm, BookId};
pub use repo::book_repo::BookRepository;
pub use repo::id::{Clock, IdGenerator, SystemClock};
pub use search::title::TitleQuery;
pub use storage::{
    BookStorage, KeyValueStore, LoadOutcome, MemoryKeyValueStore, SqliteKeyValueStore,
    StorageError, StorageResult, STORAGE_KEY,
};
pub use view::render::{
    render_books, BookItemView, ListRegion, RenderSummary, ShelfRegion, ShelfView,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Opens storage for `config`, loads the collection and renders it.
pub fn open_shelf(config: &StorageConfig) -> ShelfController {
    let repo = BookRepository::open(BookStorage::open(config));
    let mut controller = ShelfController::with_list_regions(repo);
    controller.initialize();
    controller
}

#[cfg(test)]
mod tests {
    use super::{core_version, open_shelf, ping, StorageConfig};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn open_shelf_in_memory_starts_empty() {
        let shelf = open_shelf(&StorageConfig::Memory);
        assert!(shelf.repository().is_empty());
        assert_eq!(shelf.last_render().total(), 0);
    }
}
