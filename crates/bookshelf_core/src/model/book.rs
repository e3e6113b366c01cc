//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical book record shared by storage, repository and views.
//! - Define the add-book form payload handed over by host UIs.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - Only `is_complete` is mutable after creation.
//! - Serialized field names match the persisted layout
//!   (`id`, `title`, `author`, `year`, `isComplete`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier for a book record.
///
/// Epoch milliseconds at creation time, bumped when needed to stay unique.
pub type BookId = i64;

// ASCII digits only; `\d` is Unicode-aware in `regex`.
static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("leading integer pattern is valid"));

/// Canonical book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Older payloads may hold `null`, a float or an out-of-range number here.
    #[serde(deserialize_with = "deserialize_year")]
    pub year: i64,
    pub is_complete: bool,
}

impl Book {
    /// Creates a book with a caller-provided id.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        is_complete: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            is_complete,
        }
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle_complete(&mut self) -> bool {
        self.is_complete = !self.is_complete;
        self.is_complete
    }
}

/// Raw add-book form values as read from the host UI.
///
/// `year` stays textual; the controller parses it on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub year: String,
    pub is_complete: bool,
}

impl BookForm {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        is_complete: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            is_complete,
        }
    }

    /// Clears every field back to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parses the leading base-10 integer of `raw`.
///
/// Surrounding whitespace and trailing characters are ignored, so `" 2005 "`
/// and `"2005abc"` both yield `Some(2005)`. Only ASCII digits count. Returns
/// `None` when no digits lead the text or the value does not fit in `i64`.
pub fn parse_year(raw: &str) -> Option<i64> {
    let captures = LEADING_INTEGER.captures(raw)?;
    captures.get(1)?.as_str().parse::<i64>().ok()
}

/// Reads any JSON number into a year.
///
/// Integers beyond `i64` saturate, floats are truncated (saturating), and
/// `null` or a non-number becomes `0`, so one odd record never rejects the
/// whole collection.
fn deserialize_year<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Number(number)) = value else {
        return Ok(0);
    };
    if let Some(year) = number.as_i64() {
        return Ok(year);
    }
    if number.as_u64().is_some() {
        return Ok(i64::MAX);
    }
    Ok(number.as_f64().map_or(0, |year| year as i64))
}
