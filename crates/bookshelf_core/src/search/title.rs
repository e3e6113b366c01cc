//! Case-insensitive title substring matching.
//!
//! # Invariants
//! - Matching never mutates the searched books.
//! - The empty query matches every title.
//! - Query text is not trimmed; surrounding spaces are significant.

use crate::model::book::Book;

/// Lowercased title query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleQuery {
    needle: String,
}

impl TitleQuery {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// Returns the normalized query text.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns whether `title` contains the query, ignoring case.
    pub fn matches(&self, title: &str) -> bool {
        self.is_empty() || title.to_lowercase().contains(&self.needle)
    }

    /// Returns clones of the matching books in input order.
    pub fn filter<'a>(&self, books: impl IntoIterator<Item = &'a Book>) -> Vec<Book> {
        books
            .into_iter()
            .filter(|book| self.matches(&book.title))
            .cloned()
            .collect()
    }
}
