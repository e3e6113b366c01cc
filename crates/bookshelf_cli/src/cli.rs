use bookshelf_core::config::{
    default_log_level, resolve_db_path, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV,
};
use bookshelf_core::{BookForm, BookId, ShelfEvent, StorageConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bookshelf",
    version,
    about = "Track books you are reading and books you have finished",
    subcommand_required = false
)]
pub struct Cli {
    #[arg(
        long = "db",
        env = DB_PATH_ENV,
        value_name = "PATH",
        help = "SQLite file holding the bookshelf (defaults to a file in the temp directory)"
    )]
    pub db: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = false,
        help = "Keep books in memory only; nothing is saved (overrides --db)"
    )]
    pub memory: bool,

    #[arg(
        long,
        env = LOG_LEVEL_ENV,
        default_value = default_log_level(),
        value_name = "LEVEL",
        help = "Log level: trace|debug|info|warn|error"
    )]
    pub log_level: String,

    #[arg(
        long,
        env = LOG_DIR_ENV,
        value_name = "DIR",
        help = "Absolute directory for rolling log files; logging is off when unset"
    )]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// `--memory` wins over `--db` and `BOOKSHELF_DB_PATH`.
    pub fn storage_config(&self) -> StorageConfig {
        if self.memory {
            return StorageConfig::Memory;
        }
        StorageConfig::Sqlite(self.db.clone().unwrap_or_else(resolve_db_path))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show every book (default)
    List,
    /// Add a book
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        author: String,
        /// Publication year; non-numeric values are stored as 0
        #[arg(long, default_value = "")]
        year: String,
        /// Mark the book as already read
        #[arg(long, default_value_t = false)]
        complete: bool,
    },
    /// Show only books whose title contains QUERY (case-insensitive)
    Search {
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
    },
    /// Flip a book between read and unread
    Toggle {
        #[arg(value_name = "ID", allow_negative_numbers = true)]
        id: BookId,
    },
    /// Delete a book
    Delete {
        #[arg(value_name = "ID", allow_negative_numbers = true)]
        id: BookId,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add { .. } => "add",
            Self::Search { .. } => "search",
            Self::Toggle { .. } => "toggle",
            Self::Delete { .. } => "delete",
        }
    }

    /// Shelf event for this command; `List` only renders.
    pub fn into_event(self) -> Option<ShelfEvent> {
        match self {
            Self::List => None,
            Self::Add {
                title,
                author,
                year,
                complete,
            } => Some(ShelfEvent::AddBook(BookForm::new(title, author, year, complete))),
            Self::Search { query } => Some(ShelfEvent::Search(query)),
            Self::Toggle { id } => Some(ShelfEvent::ToggleComplete(id)),
            Self::Delete { id } => Some(ShelfEvent::Delete(id)),
        }
    }
}
