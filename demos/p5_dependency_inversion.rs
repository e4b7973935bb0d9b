//! Dependency Inversion
//! Example: Injecting the Database Backend
//!
//! Run with: cargo run --example p5_dependency_inversion
//! Set RUST_LOG=info to see connection logging on stderr.

use colored::Colorize;
use std::io::{self, Write};

use solid::database::{DataManager, Database, MySqlDatabase, SqliteDatabase};
use solid::logging;

fn main() -> solid::Result<()> {
    logging::init();
    let mut out = io::stdout().lock();

    writeln!(out, "{}", "=== MySQL Backend ===".bold())?;
    DataManager::new(MySqlDatabase).perform_data_operations(&mut out)?;

    // Swapping the backend is a one-line change at the call site.
    writeln!(out, "\n{}", "=== SQLite Backend ===".bold())?;
    DataManager::new(SqliteDatabase)
        .with_connection_string("file:users.db")
        .perform_data_operations(&mut out)?;

    writeln!(out, "\n{}", "=== Chosen at Runtime ===".bold())?;
    let use_sqlite = std::env::args().any(|a| a == "--sqlite");
    let backend: Box<dyn Database> = if use_sqlite {
        Box::new(SqliteDatabase)
    } else {
        Box::new(MySqlDatabase)
    };
    let manager = DataManager::new(backend).with_connection_string("");
    if let Err(err) = manager.perform_data_operations(&mut out) {
        writeln!(out, "{} {err}", "expected failure:".yellow())?;
    }

    Ok(())
}
