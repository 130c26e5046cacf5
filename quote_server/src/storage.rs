//! SQLite persistence for fetched quotes.
//!
//! One table, one opaque JSON column, append-only. The connection is opened once
//! at startup and shared by every request through `QuoteStore`, which is cheap
//! to clone. Writes run on the blocking pool and are bounded by a deadline; a
//! write that has not started when the deadline fires is dropped.
use log::debug;
use quote_common::{Quote, QuoteError};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;

/// Default database file, relative to the working directory.
pub const DATABASE_PATH: &str = "./cotacao.db";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS cotacao (tag TEXT)";
const INSERT_QUOTE: &str = "INSERT INTO cotacao (tag) VALUES (?1)";

/// Operational failures of the storage layer.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Open, prepare or execute failure reported by SQLite.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The quote could not be encoded for storage.
    #[error("Quote encoding error: {0}")]
    Quote(#[from] QuoteError),

    /// The insert did not finish within its deadline.
    #[error("Write deadline of {0:?} exceeded")]
    Timeout(Duration),

    /// The insert was abandoned before it reached the database.
    #[error("Write cancelled after deadline")]
    Cancelled,

    /// The blocking task panicked or was aborted.
    #[error("Storage task failed: {0}")]
    Task(String),

    /// A previous holder of the connection panicked.
    #[error("Mutex Lock Poisoned: {0}")]
    Poisoned(String),
}

impl<T> From<PoisonError<T>> for StorageError {
    fn from(err: PoisonError<T>) -> Self {
        StorageError::Poisoned(err.to_string())
    }
}

/// Handle to the quote database.
#[derive(Clone)]
pub struct QuoteStore {
    conn: Arc<Mutex<Connection>>,
}

impl QuoteStore {
    /// Open (or create) the database at `path` and make sure the table exists.
    ///
    /// `busy_timeout` bounds how long SQLite waits on a locked database before
    /// giving up, so a contended write fails instead of queueing.
    pub fn open(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self, StorageError> {
        let conn = Connection::open(path.as_ref())?;
        conn.busy_timeout(busy_timeout)?;
        conn.execute(CREATE_TABLE, [])?;
        debug!("Database ready at {}", path.as_ref().display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Insert one row holding the JSON form of `quote`, bounded by `deadline`.
    pub async fn persist(&self, quote: &Quote, deadline: Duration) -> Result<(), StorageError> {
        let payload = quote.to_json()?;
        let conn = Arc::clone(&self.conn);
        let cancelled = Arc::new(AtomicBool::new(false));
        let abandoned = Arc::clone(&cancelled);

        let insert = tokio::task::spawn_blocking(move || -> Result<(), StorageError> {
            let conn = conn.lock()?;
            if abandoned.load(Ordering::SeqCst) {
                return Err(StorageError::Cancelled);
            }
            let mut stmt = conn.prepare_cached(INSERT_QUOTE)?;
            stmt.execute(params![payload])?;
            Ok(())
        });

        match tokio::time::timeout(deadline, insert).await {
            Ok(joined) => joined.map_err(|e| StorageError::Task(e.to_string()))?,
            Err(_) => {
                cancelled.store(true, Ordering::SeqCst);
                Err(StorageError::Timeout(deadline))
            }
        }
    }
}
