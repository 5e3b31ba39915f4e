//! SQLite persistence.
//!
//! Every operation opens its own connection and drops it before returning;
//! there is no pooling and no long-lived transaction.

mod consumption;
mod schema;
mod users;

pub use consumption::ConsumptionRecord;
pub use users::{NewUser, User, UserId};

use crate::error::Result;
use rusqlite::Connection;
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle to the database file.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    /// Set once the schema has been created or upgraded for this file.
    schema_ready: Cell<bool>,
}

impl Store {
    /// Creates a handle; the file itself is created lazily on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            schema_ready: Cell::new(false),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection, making sure the schema exists.
    pub(crate) fn connect(&self) -> Result<Connection> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(&self.path)?;
        if !self.schema_ready.get() {
            schema::ensure_schema(&conn)?;
            self.schema_ready.set(true);
            log::debug!("Schema ready in {}", self.path.display());
        }
        Ok(conn)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Store;
    use tempfile::TempDir;

    /// A store backed by a file in a fresh temporary directory.
    pub fn temp_store() -> (TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("ecostar_test.db"));
        (dir, store)
    }
}
