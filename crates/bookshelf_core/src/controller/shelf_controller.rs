//! Bookshelf event handling.
//!
//! # Responsibility
//! - Handle add, search, toggle and delete events.
//! - Keep the two target regions in sync with the repository.
//!
//! # Invariants
//! - Every handler runs to completion and leaves both regions rendered.
//! - Search results are not sticky: any mutation re-renders the full
//!   collection and drops the active filter.
//! - No handler surfaces an error to the caller.

use crate::model::book::{parse_year, Book, BookForm, BookId};
use crate::repo::book_repo::BookRepository;
use crate::view::render::{render_books, ListRegion, RenderSummary, ShelfRegion};
use log::{info, warn};

/// User-initiated event with owned payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfEvent {
    AddBook(BookForm),
    Search(String),
    ToggleComplete(BookId),
    Delete(BookId),
}

/// What a handled event did, plus the resulting render counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Added {
        book: Book,
        summary: RenderSummary,
    },
    Searched {
        summary: RenderSummary,
    },
    Toggled {
        book_id: BookId,
        /// New flag, or `None` when the id was unknown.
        is_complete: Option<bool>,
        summary: RenderSummary,
    },
    Deleted {
        book_id: BookId,
        removed: usize,
        summary: RenderSummary,
    },
}

impl EventOutcome {
    pub fn summary(&self) -> RenderSummary {
        match self {
            Self::Added { summary, .. }
            | Self::Searched { summary }
            | Self::Toggled { summary, .. }
            | Self::Deleted { summary, .. } => *summary,
        }
    }
}

/// Which books the regions currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    All,
    Filtered { query: String },
}

/// Controller owning the repository and the two output regions.
pub struct ShelfController<R: ShelfRegion = ListRegion> {
    repo: BookRepository,
    incomplete: R,
    complete: R,
    mode: ViewMode,
    last_render: RenderSummary,
}

impl ShelfController<ListRegion> {
    /// Controller rendering into fresh [`ListRegion`]s.
    pub fn with_list_regions(repo: BookRepository) -> Self {
        Self::new(repo, ListRegion::new(), ListRegion::new())
    }
}

impl<R: ShelfRegion> ShelfController<R> {
    pub fn new(repo: BookRepository, incomplete: R, complete: R) -> Self {
        Self {
            repo,
            incomplete,
            complete,
            mode: ViewMode::All,
            last_render: RenderSummary::default(),
        }
    }

    /// Renders the full collection, as on application start.
    pub fn initialize(&mut self) -> RenderSummary {
        let summary = self.render_all();
        info!(
            "event=shelf_init module=controller status=ok storage_available={} incomplete={} complete={}",
            self.repo.storage().is_available(),
            summary.incomplete,
            summary.complete
        );
        summary
    }

    /// Handles the add-book form submission and resets the form.
    ///
    /// A year without leading digits is stored as `0`.
    pub fn submit_book(&mut self, form: &mut BookForm) -> Book {
        let year = parse_year(&form.year).unwrap_or_else(|| {
            warn!(
                "event=book_submit module=controller status=year_unparsed year_len={}",
                form.year.len()
            );
            0
        });
        let book = self.repo.create(
            form.title.as_str(),
            form.author.as_str(),
            year,
            form.is_complete,
        );
        self.render_all();
        form.reset();
        book
    }

    /// Shows only books whose title contains `query`; the collection is untouched.
    pub fn submit_search(&mut self, query: &str) -> RenderSummary {
        let matches = self.repo.search(query);
        let summary = render_books(&matches, &mut self.incomplete, &mut self.complete);
        self.mode = ViewMode::Filtered {
            query: query.to_string(),
        };
        self.last_render = summary;
        info!(
            "event=shelf_search module=controller status=ok query_len={} hits={}",
            query.chars().count(),
            summary.total()
        );
        summary
    }

    /// Flips completion of `book_id`, then re-renders the full collection.
    pub fn click_toggle(&mut self, book_id: BookId) -> Option<bool> {
        let is_complete = self.repo.toggle_complete(book_id);
        self.render_all();
        is_complete
    }

    /// Removes `book_id`, then re-renders the full collection.
    pub fn click_delete(&mut self, book_id: BookId) -> usize {
        let removed = self.repo.remove_by_id(book_id);
        self.render_all();
        removed
    }

    /// Routes an owned event to its handler.
    pub fn dispatch(&mut self, event: ShelfEvent) -> EventOutcome {
        match event {
            ShelfEvent::AddBook(mut form) => {
                let book = self.submit_book(&mut form);
                EventOutcome::Added {
                    book,
                    summary: self.last_render,
                }
            }
            ShelfEvent::Search(query) => EventOutcome::Searched {
                summary: self.submit_search(&query),
            },
            ShelfEvent::ToggleComplete(book_id) => {
                let is_complete = self.click_toggle(book_id);
                EventOutcome::Toggled {
                    book_id,
                    is_complete,
                    summary: self.last_render,
                }
            }
            ShelfEvent::Delete(book_id) => {
                let removed = self.click_delete(book_id);
                EventOutcome::Deleted {
                    book_id,
                    removed,
                    summary: self.last_render,
                }
            }
        }
    }

    pub fn repository(&self) -> &BookRepository {
        &self.repo
    }

    pub fn incomplete(&self) -> &R {
        &self.incomplete
    }

    pub fn complete(&self) -> &R {
        &self.complete
    }

    pub fn view_mode(&self) -> &ViewMode {
        &self.mode
    }

    /// Hands back `(incomplete, complete)`.
    pub fn into_regions(self) -> (R, R) {
        (self.incomplete, self.complete)
    }

    /// Counts from the most recent render.
    pub fn last_render(&self) -> RenderSummary {
        self.last_render
    }

    fn render_all(&mut self) -> RenderSummary {
        self.mode = ViewMode::All;
        self.last_render =
            render_books(self.repo.books(), &mut self.incomplete, &mut self.complete);
        self.last_render
    }
}
