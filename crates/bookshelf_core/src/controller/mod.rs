//! Interaction controllers binding user events to repository mutations.
//!
//! # Responsibility
//! - Translate host UI events into repository calls.
//! - Re-render target regions after every handled event.

pub mod shelf_controller;
