//! Plain-text rendering of the two shelf regions.

use bookshelf_core::{BookItemView, EventOutcome, ListRegion};
use std::fmt::Write;

const INCOMPLETE_HEADING: &str = "Belum selesai dibaca";
const COMPLETE_HEADING: &str = "Selesai dibaca";

/// Formats both regions, incomplete first.
pub fn render_text(incomplete: &ListRegion, complete: &ListRegion) -> String {
    let mut out = String::new();
    write_region(&mut out, INCOMPLETE_HEADING, incomplete);
    out.push('\n');
    write_region(&mut out, COMPLETE_HEADING, complete);
    out
}

/// One-line summary of a handled event.
pub fn describe(outcome: &EventOutcome) -> String {
    match outcome {
        EventOutcome::Added { book, .. } => format!("added book {}", book.id),
        EventOutcome::Searched { summary } => format!("{} match(es)", summary.total()),
        EventOutcome::Toggled {
            book_id,
            is_complete: Some(true),
            ..
        } => format!("book {book_id} marked as read"),
        EventOutcome::Toggled {
            book_id,
            is_complete: Some(false),
            ..
        } => format!("book {book_id} marked as unread"),
        EventOutcome::Toggled {
            book_id,
            is_complete: None,
            ..
        } => format!("book {book_id} not found"),
        EventOutcome::Deleted {
            book_id,
            removed: 0,
            ..
        } => format!("book {book_id} not found"),
        EventOutcome::Deleted { book_id, .. } => format!("deleted book {book_id}"),
    }
}

fn write_region(out: &mut String, heading: &str, region: &ListRegion) {
    let _ = writeln!(out, "== {heading} ({}) ==", region.len());
    if region.is_empty() {
        out.push_str("  (empty)\n");
    }
    for item in region.items() {
        write_item(out, item);
    }
}

fn write_item(out: &mut String, item: &BookItemView) {
    let _ = writeln!(out, "  [{}] {}", item.book_id, item.title);
    let _ = writeln!(out, "      {}", item.author_label);
    let _ = writeln!(out, "      {}", item.year_label);
    let _ = writeln!(
        out,
        "      actions: {} | {}",
        item.toggle_label, item.delete_label
    );
}
