//! Terminal front end for the bookshelf.
//!
//! # Responsibility
//! - Map one command-line invocation to one shelf event.
//! - Print both rendered regions after the event.

mod cli;
mod output;

use bookshelf_core::{init_logging, open_shelf};
use clap::Parser;
use cli::{Cli, Command};
use log::{info, warn};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = init_logging(&cli.log_level, log_dir) {
            eprintln!("failed to initialize logging: {err}");
            return ExitCode::FAILURE;
        }
    }

    let mut shelf = open_shelf(&cli.storage_config());
    let command = cli.command.as_ref().map_or("list", Command::name);

    let event = cli.command.and_then(Command::into_event);
    let notice = event.map(|event| output::describe(&shelf.dispatch(event)));

    let storage_available = shelf.repository().storage().is_available();
    if !storage_available {
        warn!(
            "event=cli_run module=cli status=degraded command={} reason=storage_unavailable",
            command
        );
        eprintln!("warning: storage unavailable; changes are not saved");
    }
    info!(
        "event=cli_run module=cli status=ok command={} storage_available={} incomplete={} complete={}",
        command,
        storage_available,
        shelf.incomplete().len(),
        shelf.complete().len()
    );
    if let Some(notice) = notice {
        println!("{notice}");
    }
    print!("{}", output::render_text(shelf.incomplete(), shelf.complete()));
    ExitCode::SUCCESS
}
