//! Snapshot store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist and reload the entire project collection as one JSON payload.
//! - Reject invalid persisted state on load instead of masking it.
//!
//! # Invariants
//! - `save` replaces the single snapshot row atomically.
//! - `load` returns an empty collection when nothing was ever persisted.

use crate::db::DbError;
use crate::model::project::Project;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for snapshot save/load operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// The collection could not be serialized for writing.
    Encode(serde_json::Error),
    /// The persisted payload does not deserialize into a project collection.
    InvalidSnapshot(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode workspace snapshot: {err}"),
            Self::InvalidSnapshot(message) => {
                write!(f, "invalid persisted workspace snapshot: {message}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::InvalidSnapshot(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Whole-collection persistence contract.
///
/// Implementations serialize the full project list on every `save` and must
/// return the complete previously persisted collection from `load` before
/// any mutation is accepted by callers.
pub trait SnapshotStore {
    fn save(&self, projects: &[Project]) -> StoreResult<()>;
    fn load(&self) -> StoreResult<Vec<Project>>;
}

/// SQLite-backed snapshot store holding one payload row.
pub struct SqliteSnapshotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotStore for SqliteSnapshotStore<'_> {
    fn save(&self, projects: &[Project]) -> StoreResult<()> {
        let payload = serde_json::to_string(projects).map_err(StoreError::Encode)?;

        self.conn.execute(
            "INSERT INTO workspace_snapshot (id, payload, updated_at)
             VALUES (1, ?1, (strftime('%s', 'now') * 1000))
             ON CONFLICT (id) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![payload],
        )?;

        Ok(())
    }

    fn load(&self) -> StoreResult<Vec<Project>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM workspace_snapshot WHERE id = 1;",
                [],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(payload) => serde_json::from_str(&payload)
                .map_err(|err| StoreError::InvalidSnapshot(err.to_string())),
            None => Ok(Vec::new()),
        }
    }
}
