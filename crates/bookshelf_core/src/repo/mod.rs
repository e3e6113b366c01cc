//! Repository layer over the in-memory book collection.
//!
//! # Responsibility
//! - Own the ordered collection and its id source.
//! - Persist the whole collection after every mutation.
//!
//! # Invariants
//! - Book ids are unique within the collection.
//! - Insertion order is preserved across loads and saves.

pub mod book_repo;
pub mod id;
