//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose bookshelf events as sync functions to Dart via FRB.
//! - Return both rendered regions with every response.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Each call loads the collection, handles one event, and persists.

use bookshelf_core::config::resolve_db_path;
use bookshelf_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, open_shelf,
    ping as ping_inner, BookForm, BookItemView, EventOutcome, ListRegion, ShelfController,
    ShelfEvent, StorageConfig,
};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;

static SHELF_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One rendered book row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfItem {
    /// Book id; epoch-millisecond scale fits Dart `int`.
    pub book_id: i64,
    pub title: String,
    pub author_label: String,
    pub year_label: String,
    pub toggle_label: String,
    pub delete_label: String,
    pub is_complete: bool,
}

/// Response envelope carrying both regions after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfResponse {
    pub ok: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
    /// Id of the book created, toggled or deleted, when applicable.
    pub book_id: Option<i64>,
    pub incomplete: Vec<ShelfItem>,
    pub complete: Vec<ShelfItem>,
}

/// Renders the full collection.
#[flutter_rust_bridge::frb(sync)]
pub fn shelf_list() -> ShelfResponse {
    let shelf = open_entry_shelf();
    let message = format!("{} book(s).", shelf.repository().len());
    respond(shelf, message, None)
}

/// Handles the add-book form submission.
///
/// `year` is the raw field text; a non-numeric value is stored as `0`.
#[flutter_rust_bridge::frb(sync)]
pub fn shelf_add_book(
    title: String,
    author: String,
    year: String,
    is_complete: bool,
) -> ShelfResponse {
    run_event(ShelfEvent::AddBook(BookForm::new(
        title,
        author,
        year,
        is_complete,
    )))
}

/// Renders only books whose title contains `query`, ignoring case.
#[flutter_rust_bridge::frb(sync)]
pub fn shelf_search(query: String) -> ShelfResponse {
    run_event(ShelfEvent::Search(query))
}

/// Flips completion of `book_id` and renders the full collection.
#[flutter_rust_bridge::frb(sync)]
pub fn shelf_toggle(book_id: i64) -> ShelfResponse {
    run_event(ShelfEvent::ToggleComplete(book_id))
}

/// Deletes `book_id` and renders the full collection.
#[flutter_rust_bridge::frb(sync)]
pub fn shelf_delete(book_id: i64) -> ShelfResponse {
    run_event(ShelfEvent::Delete(book_id))
}

fn run_event(event: ShelfEvent) -> ShelfResponse {
    let mut shelf = open_entry_shelf();
    let (message, book_id) = match shelf.dispatch(event) {
        EventOutcome::Added { book, .. } => ("Book added.".to_string(), Some(book.id)),
        EventOutcome::Searched { summary } => {
            let message = if summary.total() == 0 {
                "No results.".to_string()
            } else {
                format!("Found {} result(s).", summary.total())
            };
            (message, None)
        }
        EventOutcome::Toggled {
            book_id,
            is_complete,
            ..
        } => {
            let message = match is_complete {
                Some(true) => "Marked as read.",
                Some(false) => "Marked as unread.",
                None => "Book not found.",
            };
            (message.to_string(), Some(book_id))
        }
        EventOutcome::Deleted {
            book_id, removed, ..
        } => {
            let message = if removed == 0 {
                "Book not found."
            } else {
                "Book deleted."
            };
            (message.to_string(), Some(book_id))
        }
    };
    respond(shelf, message, book_id)
}

fn respond(shelf: ShelfController, message: String, book_id: Option<i64>) -> ShelfResponse {
    let ok = shelf.repository().storage().is_available();
    let message = if ok {
        message
    } else {
        warn!("event=ffi_response module=ffi status=degraded reason=storage_unavailable");
        format!("{message} Storage unavailable; changes are not saved.")
    };
    let (incomplete, complete) = shelf.into_regions();
    ShelfResponse {
        ok,
        message,
        book_id,
        incomplete: to_items(incomplete),
        complete: to_items(complete),
    }
}

fn open_entry_shelf() -> ShelfController {
    open_shelf(&StorageConfig::Sqlite(entry_db_path()))
}

fn entry_db_path() -> PathBuf {
    SHELF_DB_PATH.get_or_init(resolve_db_path).clone()
}

fn to_items(region: ListRegion) -> Vec<ShelfItem> {
    region.into_items().into_iter().map(to_shelf_item).collect()
}

fn to_shelf_item(item: BookItemView) -> ShelfItem {
    ShelfItem {
        book_id: item.book_id,
        title: item.title,
        author_label: item.author_label,
        year_label: item.year_label,
        toggle_label: item.toggle_label.to_string(),
        delete_label: item.delete_label.to_string(),
        is_complete: item.is_complete,
    }
}
