//! Database module for Smartnotes
//!
//! Provides SQLite storage for notes.

pub mod notes;
pub mod schema;

use crate::error::Result;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Mutex;

/// Database handle wrapping a single SQLite connection
pub struct Database {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (or create) the database at the given path
    pub fn open(db_path: PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        schema::init_db(&conn)?;

        Ok(Database {
            conn: Mutex::new(conn),
            path: Some(db_path),
        })
    }

    /// Open an in-memory database. Substitutes for the file-backed store
    /// in tests; contents live only as long as this handle.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_db(&conn)?;
        Ok(Database {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Lock and return the underlying connection
    pub fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }

    /// Get the database file path, if file-backed
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_creation() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("notes.db");

        let db = Database::open(db_path.clone()).unwrap();
        assert_eq!(db.path(), Some(&db_path));
        assert!(db_path.exists());
    }

    #[test]
    fn test_in_memory_database() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.path().is_none());
    }
}
