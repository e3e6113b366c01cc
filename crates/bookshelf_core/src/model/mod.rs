//! Bookshelf domain model.
//!
//! # Responsibility
//! - Define the data structures used by core business logic.
//!
//! # Invariants
//! - Every book is identified by a stable, unique `BookId`.
//! - Deletion removes the record; there are no tombstones.

pub mod book;
