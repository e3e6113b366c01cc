//! Pure projection of books into two target regions.
//!
//! # Invariants
//! - Rendering clears both regions before appending anything.
//! - Item order within a region follows input order.
//! - No state survives between renders.

use crate::model::book::{Book, BookId};

pub const AUTHOR_LABEL_PREFIX: &str = "Penulis";
pub const YEAR_LABEL_PREFIX: &str = "Tahun";
pub const MARK_COMPLETE_LABEL: &str = "Selesai dibaca";
pub const MARK_INCOMPLETE_LABEL: &str = "Belum selesai dibaca";
pub const DELETE_LABEL: &str = "Hapus Buku";

/// One rendered book entry with its action controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookItemView {
    pub book_id: BookId,
    pub title: String,
    pub author_label: String,
    pub year_label: String,
    /// Label of the control that flips completion; depends on current state.
    pub toggle_label: &'static str,
    pub delete_label: &'static str,
    pub is_complete: bool,
}

impl BookItemView {
    pub fn from_book(book: &Book) -> Self {
        Self {
            book_id: book.id,
            title: book.title.clone(),
            author_label: format!("{AUTHOR_LABEL_PREFIX}: {}", book.author),
            year_label: format!("{YEAR_LABEL_PREFIX}: {}", book.year),
            toggle_label: if book.is_complete {
                MARK_INCOMPLETE_LABEL
            } else {
                MARK_COMPLETE_LABEL
            },
            delete_label: DELETE_LABEL,
            is_complete: book.is_complete,
        }
    }
}

/// Output container receiving rendered items.
pub trait ShelfRegion {
    fn clear(&mut self);
    fn append(&mut self, item: BookItemView);
}

/// `Vec`-backed region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRegion {
    items: Vec<BookItemView>,
}

impl ListRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[BookItemView] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<BookItemView> {
        self.items
    }
}

impl ShelfRegion for ListRegion {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn append(&mut self, item: BookItemView) {
        self.items.push(item);
    }
}

/// Item counts produced by one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub incomplete: usize,
    pub complete: usize,
}

impl RenderSummary {
    pub fn total(&self) -> usize {
        self.incomplete + self.complete
    }
}

/// Clears both regions and fills them by partitioning `books` on completion.
pub fn render_books<'a, I, C>(
    books: impl IntoIterator<Item = &'a Book>,
    incomplete: &mut I,
    complete: &mut C,
) -> RenderSummary
where
    I: ShelfRegion + ?Sized,
    C: ShelfRegion + ?Sized,
{
    incomplete.clear();
    complete.clear();

    let mut summary = RenderSummary::default();
    for book in books {
        let item = BookItemView::from_book(book);
        if book.is_complete {
            complete.append(item);
            summary.complete += 1;
        } else {
            incomplete.append(item);
            summary.incomplete += 1;
        }
    }
    summary
}

/// Owned snapshot of both regions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShelfView {
    pub incomplete: ListRegion,
    pub complete: ListRegion,
}

impl ShelfView {
    pub fn project<'a>(books: impl IntoIterator<Item = &'a Book>) -> Self {
        let mut view = Self::default();
        render_books(books, &mut view.incomplete, &mut view.complete);
        view
    }
}
