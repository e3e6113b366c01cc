//! Title search over the in-memory collection.
//!
//! # Responsibility
//! - Normalize user query text once per search.
//! - Keep matching rules in one place for repository and controller.

pub mod title;
