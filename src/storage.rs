//! Local persistence for assembled systems.
//!
//! One `SQLite` database holds three tables:
//!
//! ```text
//! Systems   one row per system, keyed by SystemAddress, unique StarSystem
//! Stars     one row per star scan, unique BodyName
//! Bodies    one row per body scan, unique BodyName
//! ```
//!
//! Re-ingesting the same journals hits the unique constraints; those
//! inserts fail with [`StorageError::Duplicate`], which the assembler-facing
//! [`SystemSink`](crate::assemble::SystemSink) impl treats as already stored.

mod schema;
mod scans;
mod sink;
mod systems;

use std::{fs, io, path::Path};

use rusqlite::{Connection, ffi};

pub use systems::StoredSystem;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("record already exists: {0}")]
    Duplicate(String),

    #[error("database error: {0}")]
    Sqlite(rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Only key collisions are duplicates; other constraint failures are not.
impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::SqliteFailure(err, msg)
                if matches!(
                    err.extended_code,
                    ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                ) =>
            {
                Self::Duplicate(msg.unwrap_or_else(|| err.to_string()))
            }
            other => Self::Sqlite(other),
        }
    }
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Row counts across the three tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoredCounts {
    pub systems: u64,
    pub stars: u64,
    pub bodies: u64,
}

/// `SQLite`-backed storage for systems, stars and bodies.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens (or creates) the database at `path` and ensures the tables exist.
    ///
    /// The parent directory is created if it doesn't exist.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Self::init(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(schema::CREATE_TABLES)?;
        Ok(Self { conn })
    }

    /// Counts the rows stored in each table.
    pub fn counts(&self) -> Result<StoredCounts> {
        Ok(StoredCounts {
            systems: self.count("Systems")?,
            stars: self.count("Stars")?,
            bodies: self.count("Bodies")?,
        })
    }

    fn count(&self, table: &str) -> Result<u64> {
        let n: u64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn open_creates_database_and_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("loopy.db");

        let storage = Storage::open(&path).unwrap();

        assert!(path.exists());
        assert_eq!(storage.counts().unwrap(), StoredCounts::default());
    }

    #[test]
    fn reopening_keeps_tables() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("loopy.db");

        Storage::open(&path).unwrap();
        let storage = Storage::open(&path).unwrap();

        assert_eq!(storage.counts().unwrap(), StoredCounts::default());
    }

    #[test]
    fn not_null_violation_is_not_a_duplicate() {
        let storage = Storage::open_in_memory().unwrap();
        let err = storage
            .conn
            .execute("INSERT INTO Systems (SystemAddress) VALUES (1)", [])
            .unwrap_err();

        assert!(matches!(StorageError::from(err), StorageError::Sqlite(_)));
    }

    #[test]
    fn key_collision_is_a_duplicate() {
        let storage = Storage::open_in_memory().unwrap();
        let insert = "INSERT INTO Systems (SystemAddress, StarSystem) VALUES (1, 'Sol')";
        storage.conn.execute(insert, []).unwrap();
        let err = storage.conn.execute(insert, []).unwrap_err();

        assert!(matches!(StorageError::from(err), StorageError::Duplicate(_)));
    }
}
