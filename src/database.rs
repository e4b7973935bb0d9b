//! Dependency inversion: `DataManager` depends on the `Database` trait, and the
//! concrete backend is injected at construction.

use std::io::Write;

use log::{error, info};

use crate::error::{Result, SolidError};

pub const DEFAULT_CONNECTION_STRING: &str = "Data Source=...;User=...;Password=...";
pub const DEFAULT_QUERY: &str = "Select * FROM Users";

pub trait Database {
    /// Display name used in every emitted line, e.g. `MySQL`.
    fn name(&self) -> &str;

    fn connect(&self, connection_string: &str, out: &mut dyn Write) -> Result<()> {
        if connection_string.trim().is_empty() {
            return Err(SolidError::connection_failed(
                self.name(),
                "connection string is empty",
            ));
        }
        writeln!(
            out,
            "Connecting to {} database with: {connection_string}",
            self.name()
        )?;
        info!("connected to {}", self.name());
        Ok(())
    }

    fn query(&self, query: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Executing {} query: {query}", self.name())?;
        Ok(())
    }

    fn disconnect(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Disconnecting from {} database", self.name())?;
        info!("disconnected from {}", self.name());
        Ok(())
    }
}

impl<T: Database + ?Sized> Database for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn connect(&self, connection_string: &str, out: &mut dyn Write) -> Result<()> {
        (**self).connect(connection_string, out)
    }

    fn query(&self, query: &str, out: &mut dyn Write) -> Result<()> {
        (**self).query(query, out)
    }

    fn disconnect(&self, out: &mut dyn Write) -> Result<()> {
        (**self).disconnect(out)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDatabase;

impl Database for MySqlDatabase {
    fn name(&self) -> &str {
        "MySQL"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDatabase;

impl Database for SqliteDatabase {
    fn name(&self) -> &str {
        "SQLite"
    }
}

pub struct DataManager<D> {
    database: D,
    connection_string: String,
    query: String,
}

impl<D: Database> DataManager<D> {
    pub fn new(database: D) -> Self {
        DataManager {
            database,
            connection_string: DEFAULT_CONNECTION_STRING.to_string(),
            query: DEFAULT_QUERY.to_string(),
        }
    }

    pub fn with_connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = connection_string.into();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn database(&self) -> &D {
        &self.database
    }

    /// Connect, run the configured query, disconnect.
    ///
    /// When the connection fails nothing else runs. The failure is logged,
    /// not emitted, and the connection error is returned as is.
    pub fn perform_data_operations(&self, out: &mut dyn Write) -> Result<()> {
        if let Err(err) = self.database.connect(&self.connection_string, out) {
            error!("Failed to connect to the database. {err}");
            return Err(err);
        }
        self.database.query(&self.query, out)?;
        self.database.disconnect(out)
    }
}
