//! Persistence connector.
//!
//! A single SQLite connection is opened at startup and shared by every request
//! through a cloneable [`Database`] handle. Opening the connection also applies
//! the schema, so a `Connected` database is ready for the todo store.

mod todos;

use crate::error::AppError;
use log::{error, info};
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS todos (
    id         TEXT PRIMARY KEY NOT NULL,
    text       TEXT NOT NULL CHECK (length(text) > 0),
    completed  INTEGER NOT NULL DEFAULT 0,
    deadline   TEXT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_todos_created_at ON todos (created_at);
CREATE INDEX IF NOT EXISTS idx_todos_deadline ON todos (deadline);
";

/// Shared handle to the todo database. Cloning is cheap and every clone talks
/// to the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

/// Outcome of [`Database::connect`].
pub enum ConnectionStatus {
    Connected(Database),
    Failed(String),
}

impl Database {
    /// Opens the database behind `uri` and prepares the schema.
    ///
    /// Accepted forms: a filesystem path, `sqlite://<path>`, an SQLite
    /// `file:` URI, or `:memory:`.
    pub fn connect(uri: &str) -> ConnectionStatus {
        match Self::open(uri) {
            Ok(database) => {
                info!("Database connected at {}", uri);
                ConnectionStatus::Connected(database)
            }
            Err(e) => {
                error!("Database connection to {} failed: {}", uri, e);
                ConnectionStatus::Failed(e.to_string())
            }
        }
    }

    /// A private in-memory database, used by tests.
    pub fn in_memory() -> Result<Self, AppError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn open(uri: &str) -> Result<Self, AppError> {
        let target = uri.strip_prefix("sqlite://").unwrap_or(uri);
        // The default open flags include SQLITE_OPEN_URI, so `file:` URIs work as-is.
        let conn = Connection::open(target)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, AppError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, AppError> {
        self.conn.lock().map_err(|_| AppError::LockPoisoned)
    }
}
