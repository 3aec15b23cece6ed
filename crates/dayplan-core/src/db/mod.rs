//! Database operations and SQLite management for documents, plans and
//! progress.
//!
//! Each [`Database`] owns one connection. The tracker opens a fresh
//! connection per operation on a blocking thread, so concurrent callers never
//! share a connection; SQLite's own locking plus short write transactions
//! serialize updates to the same progress row.

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod document_queries;
pub mod migrations;
pub mod plan_queries;
pub mod progress_queries;
mod utils;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
