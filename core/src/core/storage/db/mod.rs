//! redb-backed storage.
//!
//! All entries live in one table (`&str` → `&str`). A batch write is a single
//! write transaction, so multi-collection updates commit together.

use crate::core::storage::Storage;
use crate::core::storage::error::StorageError;
use crate::types::Config;
use redb::{ReadableDatabase, TableDefinition};
use tracing::debug;

/// Entries table: collection key → JSON document.
const ENTRIES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("entries");

/// The main database struct wrapping redb.
pub struct RedbStorage {
    db: redb::Database,
}

impl RedbStorage {
    /// Creates or opens a database using the path from the config.
    pub fn open(config: &Config) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&config.base_path)?;

        let db = redb::Database::create(config.db_path())?;

        // Initialize tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ENTRIES_TABLE)?;
        }
        write_txn.commit()?;

        debug!(path = %config.db_path().display(), "opened redb storage");
        Ok(Self { db })
    }
}

impl Storage for RedbStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ENTRIES_TABLE)?;

        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn write(&mut self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write()?;

        {
            let mut table = write_txn.open_table(ENTRIES_TABLE)?;
            for (key, value) in entries {
                table.insert(*key, *value)?;
            }
        }

        write_txn.commit()?;
        Ok(())
    }
}
