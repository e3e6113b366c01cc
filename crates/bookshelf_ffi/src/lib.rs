//! Flutter bridge for the bookshelf core.

pub mod api;
