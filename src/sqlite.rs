use std::path::{Path, PathBuf};

use log::{debug, info};
use rusqlite::Connection;

use crate::error::Result;
use crate::schema::{rental_schema, Schema};

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "movie_rentals.db";

/// Rental store configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RentalsConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Schema definition for the database
    pub schema: Schema,
}

impl RentalsConfig {
    /// Create a new config with path and schema
    pub fn new(db_path: impl Into<PathBuf>, schema: Schema) -> Self {
        Self {
            db_path: db_path.into(),
            schema,
        }
    }

    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }
}

impl Default for RentalsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH, rental_schema())
    }
}

/// Exclusive handle on the rental database.
///
/// The connection is released when the store is dropped, so every exit path
/// closes it; [`RentalStore::close`] does the same on the normal path and
/// reports any error SQLite raises while closing.
#[derive(Debug)]
pub struct RentalStore {
    conn: Connection,
    schema: Schema,
}

impl RentalStore {
    /// Open (or create) the database file named by `config`.
    pub fn open(config: RentalsConfig) -> Result<Self> {
        info!("opening rental store at {}", config.db_path.display());
        let conn = Connection::open(&config.db_path)?;
        Self::from_connection(conn, config.schema)
    }

    /// Open (or create) a database at `path` with the rental schema.
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(RentalsConfig::default().with_db_path(path))
    }

    /// Open a private in-memory database with the rental schema. Useful for testing.
    pub fn open_in_memory() -> Result<Self> {
        debug!("opening in-memory rental store");
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, rental_schema())
    }

    fn from_connection(conn: Connection, schema: Schema) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn, schema })
    }

    /// Create all tables if they don't exist.
    ///
    /// Idempotent: safe to call on an existing database any number of times.
    /// Each DDL statement runs in autocommit mode, so the schema is durable
    /// once this returns.
    pub fn initialize_schema(&self) -> Result<()> {
        let sql = self.schema.to_sql();
        debug!("applying schema:\n{sql}");
        self.conn.execute_batch(&sql)?;
        Ok(())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Close the connection, surfacing any error from SQLite.
    pub fn close(self) -> Result<()> {
        debug!("closing rental store");
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
