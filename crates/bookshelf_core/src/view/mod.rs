//! Shelf rendering.
//!
//! # Responsibility
//! - Project a book sequence into the incomplete and complete regions.
//! - Keep display labels out of host UIs.

pub mod render;
